//! Secret missions and the victory check

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::map::world_map::WorldMap;

/// The player's secret objective, drawn once at game start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    /// Wipe the given army color off the map
    DestroyColor(String),
    /// Hold at least this many territories
    ConquerCount(u32),
}

impl Mission {
    /// Uniform draw between the two mission kinds
    pub fn draw(rng: &mut impl Rng, config: &GameConfig) -> Self {
        if rng.gen_range(0..2) == 0 {
            Mission::DestroyColor(config.target_color.clone())
        } else {
            Mission::ConquerCount(config.conquer_goal)
        }
    }

    /// Whether the objective is met on the current map
    ///
    /// One pass over the store: count the player's territories and note
    /// whether the target color survives anywhere. Pure and idempotent.
    pub fn is_complete(&self, map: &WorldMap, player_color: &str) -> bool {
        let mut player_held: u32 = 0;
        let mut target_alive = false;

        for territory in map.territories() {
            if territory.is_owned_by(player_color) {
                player_held += 1;
            }
            if let Mission::DestroyColor(target) = self {
                if territory.is_owned_by(target) {
                    target_alive = true;
                }
            }
        }

        match self {
            Mission::DestroyColor(_) => !target_alive,
            Mission::ConquerCount(goal) => player_held >= *goal,
        }
    }

    /// Player-facing mission text
    pub fn description(&self) -> String {
        match self {
            Mission::DestroyColor(target) => {
                format!("Completely destroy the {} army.", target)
            }
            Mission::ConquerCount(goal) => {
                format!("Conquer a total of {} territories.", goal)
            }
        }
    }
}
