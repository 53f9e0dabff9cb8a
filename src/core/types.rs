//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// User-facing territory identifier, 1-based
///
/// The map table and all prompts number territories from 1; the store
/// translates to 0-based indices internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerritoryId(pub usize);

impl TerritoryId {
    /// 0-based index into the territory store, if the ID is nonzero
    pub fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
