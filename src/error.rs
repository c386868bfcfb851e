// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Classify(#[from] classify_lines_core::error::ClassifyError),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No extension found: {}", .0.display())]
    NoExtension(std::path::PathBuf),
}

pub type Result<T> = std::result::Result<T, AppError>;
