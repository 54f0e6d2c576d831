use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("unknown route tag: '{0}'")]
    UnknownTag(String),

    #[error("no config id given and none available from the id source")]
    MissingConfigId,

    #[error("navigation failed: {0}")]
    NavigationFailed(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
