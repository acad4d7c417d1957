use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Failed to load posts: {0}")]
    Load(String),

    #[error("Invalid post: {0}")]
    Validation(FieldErrors),

    #[error("Posts are still loading")]
    NotReady,

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlogError>;
