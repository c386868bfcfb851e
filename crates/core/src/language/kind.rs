// crates/core/src/language/kind.rs
//! 言語種別の定義

/// 登録済みの言語種別
///
/// プロセス開始時に確定する静的な対応表で、動的登録はない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageKind {
    /// JavaScript/TypeScript 系 (//, /* */, import/require, let/const/var)
    CStyle,
    /// Java (//, /* */, import; 変数宣言判定は未対応)
    Java,
}

impl LanguageKind {
    /// 拡張子から言語種別を判定
    ///
    /// 拡張子はドットなし、大文字小文字は区別しない。
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" | "mts" | "cts" => Some(Self::CStyle),
            "java" => Some(Self::Java),
            _ => None,
        }
    }
}
