//! Combat: dice throws and attack resolution

pub mod dice;
pub mod resolution;

pub use dice::roll_die;
pub use resolution::{resolve_attack, AttackError, BattleReport, BattleWinner, Conquest};
