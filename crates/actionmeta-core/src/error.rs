use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionMetaError {
    #[error("unknown resource category: {0}")]
    InvalidCategory(String),

    #[error("manifest not found: {0}")]
    ManifestNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ActionMetaError>;
