use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    /// Seeding source could not be opened or read
    #[error("IO error: {0}")]
    IoFailure(#[from] std::io::Error),

    /// A row contained something other than '0' or '1'
    #[error("Malformed grid data at row {row}, column {column}: found {found:?}")]
    MalformedGridData {
        row: usize,
        column: usize,
        found: char,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
