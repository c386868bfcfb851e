// crates/core/src/language/classifiers/c_style.rs
//! # C-Style Syntax Classifier
//!
//! JavaScript/TypeScript 系言語の行分類器。
//!
//! ## Supported Syntax
//!
//! - **Line comments**: `//`
//! - **Block comments**: `/* */`
//! - **Imports**: `import` 文、`require(...)` 呼び出し
//! - **Variable declarations**: `let` / `const` / `var`
//!
//! `const fs = require("fs");` のような行はインポートと変数宣言の両方に
//! 一致するが、アナライザ側の優先順位によりインポートとして数えられる。

use super::super::block_comment::BlockCommentTracker;
use super::super::classifier_trait::SyntaxClassifier;
use crate::error::Result;

/// JavaScript/TypeScript 系の分類器 (//, /* */, import/require, let/const/var)
#[derive(Debug, Default)]
pub struct CStyleClassifier {
    block: BlockCommentTracker,
}

impl CStyleClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            block: BlockCommentTracker::new(),
        }
    }
}

impl SyntaxClassifier for CStyleClassifier {
    fn is_comment(&mut self, line: &str) -> bool {
        self.block.classify(line.trim())
    }

    fn is_import(&self, line: &str) -> Result<bool> {
        let trimmed = line.trim();
        Ok(trimmed.starts_with("import ")
            || trimmed.starts_with("require(")
            || (trimmed.starts_with("const ") && trimmed.contains("require(")))
    }

    fn is_variable_declaration(&self, line: &str) -> Result<bool> {
        let trimmed = line.trim();
        Ok(trimmed.starts_with("let ")
            || trimmed.starts_with("const ")
            || trimmed.starts_with("var "))
    }

    fn in_block_comment(&self) -> bool {
        self.block.in_block_comment()
    }

    fn reset(&mut self) {
        self.block.reset();
    }
}
