use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] spc_core::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Report(String),
    #[error("{0}")]
    Location(String),
    #[error("--lat and --lon must be given together")]
    PartialCoordinates,
}
