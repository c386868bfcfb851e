use serde::{Deserialize, Serialize};

/// Pure classification result for one source, independent of file system metadata.
///
/// `imports` and `variables` are sub-classifications of `code`, so the
/// partition invariant is `blank + comments + code == total`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Lines that are empty after trimming.
    pub blank: usize,
    /// Line comments and block comment lines.
    pub comments: usize,
    /// Module import lines (also counted in `code`).
    pub imports: usize,
    /// Local variable declarations (also counted in `code`).
    pub variables: usize,
    /// Non-blank, non-comment lines, imports and variables included.
    pub code: usize,
    /// Number of input lines.
    pub total: usize,
}

impl AnalysisResult {
    /// Creates a new default `AnalysisResult`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
