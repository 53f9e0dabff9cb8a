use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Invalid territory: {0}")]
    InvalidTerritory(String),

    #[error("Invalid map definition: {0}")]
    InvalidMap(String),

    #[error("Map parse error: {0}")]
    MapParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WarError>;
