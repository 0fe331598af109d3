use thiserror::Error;

/// Failures of the collaborator layer (assets, configuration).
///
/// The simulation itself is total and never produces one of these.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
    #[error("Texture atlas {0} contains no frames")]
    EmptyAtlas(String),
    #[error("Invalid settings")]
    Settings(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
