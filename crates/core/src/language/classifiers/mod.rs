// crates/core/src/language/classifiers/mod.rs
//! 言語別分類器の実装
//!
//! 新しい言語への対応はここへバリアントを追加するだけでよく、
//! アナライザ側の変更は不要。

pub mod c_style;
pub mod java_style;

pub use c_style::CStyleClassifier;
pub use java_style::JavaClassifier;
