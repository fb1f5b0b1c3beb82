use std::io;

/// Errors from loading, merging, or writing vocabulary data
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("could not serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
