//! The territory store: records, the owned map container, seed data

pub mod loader;
pub mod territory;
pub mod world_map;

pub use loader::{default_map, parse_map};
pub use territory::Territory;
pub use world_map::WorldMap;
