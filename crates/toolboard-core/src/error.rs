use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("invalid status category: {0}")]
    InvalidCategory(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
