//! Territory - a named unit of the map held by one army

use serde::{Deserialize, Serialize};

use crate::core::config::MAX_NAME_LEN;
use crate::core::error::WarError;

/// A single territory: name, controlling army color, garrison size
///
/// Troop counts are unsigned so they can never go negative; the combat
/// rules guarantee no decrement is ever applied at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub owner_color: String,
    pub troops: u32,
}

impl Territory {
    /// Build a territory, enforcing the name/color length cap
    pub fn new(
        name: impl Into<String>,
        owner_color: impl Into<String>,
        troops: u32,
    ) -> Result<Self, WarError> {
        let name = name.into();
        let owner_color = owner_color.into();

        if name.chars().count() > MAX_NAME_LEN {
            return Err(WarError::InvalidTerritory(format!(
                "name '{}' exceeds {} characters",
                name, MAX_NAME_LEN
            )));
        }
        if owner_color.chars().count() > MAX_NAME_LEN {
            return Err(WarError::InvalidTerritory(format!(
                "color '{}' exceeds {} characters",
                owner_color, MAX_NAME_LEN
            )));
        }

        Ok(Self {
            name,
            owner_color,
            troops,
        })
    }

    pub fn is_owned_by(&self, color: &str) -> bool {
        self.owner_color == color
    }
}
