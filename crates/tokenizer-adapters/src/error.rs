use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to load tokenizer: {0}")]
    Load(String),

    #[error("Tokenization failed: {0}")]
    Tokenize(String),

    #[error("Unknown token id: {0}")]
    UnknownId(u32),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
