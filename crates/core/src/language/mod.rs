// crates/core/src/language/mod.rs
pub mod block_comment;
pub mod classifier_trait;
pub mod classifiers;
pub mod kind;

pub use classifier_trait::SyntaxClassifier;
pub use kind::LanguageKind;

use crate::error::{ClassifyError, Result};
use classifiers::{CStyleClassifier, JavaClassifier};

fn new_box<T: SyntaxClassifier + 'static>(c: T) -> Box<dyn SyntaxClassifier> {
    Box::new(c)
}

/// 拡張子に応じた分類器を生成する
///
/// 呼び出しごとに新しいインスタンスを返す。ブロックコメント状態が
/// ファイル間で漏れないよう、共有やキャッシュはしない。
///
/// # Errors
///
/// 拡張子に対応する言語が登録されていない場合は
/// `ClassifyError::UnsupportedLanguage` を返す。
pub fn get_classifier(extension: &str) -> Result<Box<dyn SyntaxClassifier>> {
    match LanguageKind::from_extension(extension) {
        Some(LanguageKind::CStyle) => Ok(new_box(CStyleClassifier::new())),
        Some(LanguageKind::Java) => Ok(new_box(JavaClassifier::new())),
        None => Err(ClassifyError::UnsupportedLanguage(extension.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_classifier_basic() {
        let mut c = get_classifier("js").unwrap();
        assert!(c.is_comment("// comment"));
        assert!(c.is_import("import x from 'y';").unwrap());

        let mut c = get_classifier("java").unwrap();
        assert!(c.is_comment("// comment"));
        assert!(c.is_import("import java.util.List;").unwrap());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = get_classifier("py").err().unwrap();
        assert!(matches!(err, ClassifyError::UnsupportedLanguage(ext) if ext == "py"));
    }

    #[test]
    fn test_instances_are_fresh() {
        // An unterminated block in the first source must not leak into the second
        let mut first = get_classifier("js").unwrap();
        assert!(first.is_comment("/* unterminated"));
        assert!(first.in_block_comment());

        let mut second = get_classifier("js").unwrap();
        assert!(!second.in_block_comment());
        assert!(!second.is_comment("doStuff();"));
    }
}
