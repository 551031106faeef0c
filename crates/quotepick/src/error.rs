use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Errors from building or emitting quotes.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote book is empty")]
    EmptyInput,

    #[error("malformed quote: {0}")]
    Malformed(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}
