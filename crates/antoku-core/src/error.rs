use thiserror::Error;

#[derive(Error, Debug)]
pub enum AntokuError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Puzzle Error: {0}")]
    Puzzle(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type AkResult<T> = Result<T, AntokuError>;
