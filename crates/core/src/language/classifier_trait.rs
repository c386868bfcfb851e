// crates/core/src/language/classifier_trait.rs
//! 行分類トレイト
//!
//! 各言語の構文分類器に共通のインターフェースを提供します。
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::language::classifier_trait::SyntaxClassifier;
//!
//! struct MyClassifier;
//!
//! impl SyntaxClassifier for MyClassifier {
//!     fn is_comment(&mut self, line: &str) -> bool {
//!         line.trim().starts_with("--")
//!     }
//! }
//! ```

use crate::error::{ClassifyError, Result};

/// 言語別の行分類トレイト
///
/// 各言語バリアントはこのトレイトを実装することで、
/// 統一されたインターフェースを通じて行分類を行います。
///
/// `is_comment` はブロックコメントの開始/終了を追跡する状態を持つため、
/// 1つのインスタンスを複数ファイルで共有してはいけません
/// (ファイルごとに新規作成するか、`reset` を呼び出すこと)。
pub trait SyntaxClassifier {
    /// 空白行かどうか (前後の空白を除去して空)
    fn is_blank(&self, line: &str) -> bool {
        line.trim().is_empty()
    }

    /// コメント行かどうか
    ///
    /// ブロックコメント状態を遷移させる副作用があるため、
    /// 行順に1回ずつ呼び出すこと。
    fn is_comment(&mut self, line: &str) -> bool;

    /// インポート文かどうか
    ///
    /// # Errors
    ///
    /// 対象言語で未実装の場合は `ClassifyError::NotImplemented` を返す。
    /// 黙ってデフォルト値に振り替えることはしない。
    fn is_import(&self, _line: &str) -> Result<bool> {
        Err(ClassifyError::NotImplemented {
            predicate: "is_import",
        })
    }

    /// 変数宣言かどうか
    ///
    /// 言語が未対応の場合、バリアント側で意図的に `Ok(false)` を返す
    /// 縮退実装も有効 (エラーではない)。
    ///
    /// # Errors
    ///
    /// 対象言語で未実装の場合は `ClassifyError::NotImplemented` を返す。
    fn is_variable_declaration(&self, _line: &str) -> Result<bool> {
        Err(ClassifyError::NotImplemented {
            predicate: "is_variable_declaration",
        })
    }

    /// コード行かどうか (空白でもコメントでもない)
    ///
    /// `is_comment` を経由するためブロックコメント状態を進める。
    /// アナライザ本体は優先順位付きの分類を自前で行うので、
    /// このメソッドは単独のコード判定が必要な利用者向け。
    fn is_code(&mut self, line: &str) -> bool {
        !self.is_blank(line) && !self.is_comment(line)
    }

    /// 現在ブロックコメント内かどうか（デバッグ用）
    fn in_block_comment(&self) -> bool {
        false
    }

    /// 処理状態をリセット
    ///
    /// 新しいファイルの処理を開始する前に呼び出します。
    fn reset(&mut self) {
        // Default: no-op. Override if needed.
    }
}

impl SyntaxClassifier for Box<dyn SyntaxClassifier> {
    fn is_blank(&self, line: &str) -> bool {
        (**self).is_blank(line)
    }

    fn is_comment(&mut self, line: &str) -> bool {
        (**self).is_comment(line)
    }

    fn is_import(&self, line: &str) -> Result<bool> {
        (**self).is_import(line)
    }

    fn is_variable_declaration(&self, line: &str) -> Result<bool> {
        (**self).is_variable_declaration(line)
    }

    fn is_code(&mut self, line: &str) -> bool {
        (**self).is_code(line)
    }

    fn in_block_comment(&self) -> bool {
        (**self).in_block_comment()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
