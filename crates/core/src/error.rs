// crates/core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Predicate '{predicate}' is not implemented for this language")]
    NotImplemented { predicate: &'static str },
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
