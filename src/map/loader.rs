//! Load map definitions from TOML

use serde::Deserialize;

use crate::core::config::GameConfig;
use crate::core::error::{Result, WarError};
use crate::map::territory::Territory;
use crate::map::world_map::WorldMap;

/// The standard five-territory campaign map
///
/// A balanced opening: the player (Azul) holds two territories, the
/// destruction target (Verde) one, and Vermelho the remaining two.
const DEFAULT_MAP: &str = r#"
[[territory]]
name = "Alaska"
color = "Azul"
troops = 2

[[territory]]
name = "Mexico"
color = "Vermelho"
troops = 1

[[territory]]
name = "Brasil"
color = "Verde"
troops = 3

[[territory]]
name = "Japao"
color = "Azul"
troops = 1

[[territory]]
name = "Italia"
color = "Vermelho"
troops = 2
"#;

/// A map document: a list of territory entries
#[derive(Debug, Deserialize)]
pub struct MapDefinition {
    #[serde(rename = "territory")]
    pub territories: Vec<TerritoryEntry>,
}

/// One `[[territory]]` table in a map document
#[derive(Debug, Deserialize)]
pub struct TerritoryEntry {
    pub name: String,
    pub color: String,
    pub troops: u32,
}

/// Parse a TOML map document and validate it against the configuration
///
/// Each entry goes through [`Territory::new`], so the length cap applies;
/// the entry count must match `config.territory_count` exactly.
pub fn parse_map(content: &str, config: &GameConfig) -> Result<WorldMap> {
    let definition: MapDefinition = toml::from_str(content)?;

    if definition.territories.len() != config.territory_count {
        return Err(WarError::InvalidMap(format!(
            "expected {} territories, found {}",
            config.territory_count,
            definition.territories.len()
        )));
    }

    let territories = definition
        .territories
        .into_iter()
        .map(|entry| Territory::new(entry.name, entry.color, entry.troops))
        .collect::<Result<Vec<_>>>()?;

    Ok(WorldMap::new(territories))
}

/// The built-in seed map
pub fn default_map(config: &GameConfig) -> Result<WorldMap> {
    parse_map(DEFAULT_MAP, config)
}
