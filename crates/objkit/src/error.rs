use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjkitError {
    #[error("clone round trip failed: {0}")]
    Clone(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("value error: {0}")]
    Type(#[from] objkit_types::TypeError),

    #[error("timing error: {0}")]
    Timing(#[from] objkit_timing::TimingError),
}

pub type ObjkitResult<T> = Result<T, ObjkitError>;
