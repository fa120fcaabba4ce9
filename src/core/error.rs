use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeadowError {
    #[error("Unknown species: {0:?}")]
    UnknownSpecies(crate::core::types::SpeciesId),

    #[error("Unknown colony: {0:?}")]
    UnknownColony(crate::core::types::ColonyId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeadowError>;
