// crates/core/src/language/classifiers/java_style.rs
//! # Java Syntax Classifier
//!
//! Java の行分類器。コメント構文は C 系と同じ (`//` と `/* */`)。
//! インポートは `import` 文のみ。
//! 変数宣言の判定は未対応のため、意図的な縮退実装として常に
//! `Ok(false)` を返す (どの行も変数宣言として数えない)。

use super::super::block_comment::BlockCommentTracker;
use super::super::classifier_trait::SyntaxClassifier;
use crate::error::Result;

/// Java の分類器 (//, /* */, import; 変数宣言判定は常に false)
#[derive(Debug, Default)]
pub struct JavaClassifier {
    block: BlockCommentTracker,
}

impl JavaClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            block: BlockCommentTracker::new(),
        }
    }
}

impl SyntaxClassifier for JavaClassifier {
    fn is_comment(&mut self, line: &str) -> bool {
        self.block.classify(line.trim())
    }

    fn is_import(&self, line: &str) -> Result<bool> {
        Ok(line.trim().starts_with("import "))
    }

    // 縮退実装: Java の変数宣言検出は未対応。常に false。
    fn is_variable_declaration(&self, _line: &str) -> Result<bool> {
        Ok(false)
    }

    fn in_block_comment(&self) -> bool {
        self.block.in_block_comment()
    }

    fn reset(&mut self) {
        self.block.reset();
    }
}
