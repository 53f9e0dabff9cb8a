//! Game configuration with documented constants
//!
//! The handful of fixed values the whole game runs on are collected here
//! with notes on how they interact.

/// Maximum length, in characters, of a territory name or army color.
///
/// Input longer than this is clipped with a warning during interactive
/// map entry and rejected outright in map definitions.
pub const MAX_NAME_LEN: usize = 49;

/// Menu option: leave the game.
pub const OPTION_EXIT: i32 = 0;
/// Menu option: start an attack phase.
pub const OPTION_ATTACK: i32 = 1;
/// Menu option: check the secret mission.
pub const OPTION_CHECK_MISSION: i32 = 2;

/// Configuration for a game session
///
/// Defaults reproduce the standard five-territory campaign. The seed is
/// optional so a scripted or tested session can be fully deterministic
/// while an interactive one stays unpredictable.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Army color controlled by the human player
    ///
    /// Only territories of this color may launch attacks.
    pub player_color: String,

    /// Army color the destruction mission targets
    ///
    /// The DestroyColor mission is complete once no territory of this
    /// color remains on the map.
    pub target_color: String,

    /// Number of territories on the map
    ///
    /// The standard campaign uses 5. Map definitions with a different
    /// entry count are rejected at startup.
    pub territory_count: usize,

    /// Territories the player must hold to complete the conquest mission
    pub conquer_goal: u32,

    /// RNG seed for dice and the mission draw
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_color: "Azul".to_string(),
            target_color: "Verde".to_string(),
            territory_count: 5,
            conquer_goal: 3,
            seed: None,
        }
    }
}
