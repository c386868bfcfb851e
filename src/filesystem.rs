// src/filesystem.rs
use crate::error::{AppError, Result};
use std::path::Path;

/// Read one source file as text.
///
/// Non-UTF8 sequences are replaced lossily so odd text files still classify.
///
/// # Errors
///
/// Returns `AppError::FileRead` when the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Extension tag used to resolve the language (without the leading dot).
///
/// # Errors
///
/// Returns `AppError::NoExtension` when the path has no usable extension.
pub fn extension_tag(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .ok_or_else(|| AppError::NoExtension(path.to_path_buf()))
}
