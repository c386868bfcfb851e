// crates/core/src/language/block_comment.rs
//! ブロックコメント追跡
//!
//! `/* */` 形式のブロックコメントの開始/終了を行単位で追跡します。

/// ブロックコメント状態機械 (`/* */`)
///
/// 1ファイルの解析中、分類器インスタンスが1つだけ所有します。
/// 初期状態はブロック外で、終了状態はありません。
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockCommentTracker {
    in_block_comment: bool,
}

impl BlockCommentTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_block_comment: false,
        }
    }

    /// 行がコメントかどうかを判定し、状態を遷移させる
    ///
    /// `trimmed` は前後の空白を除去済みであること。
    /// 終端マーカーは行全体から単純検索するため、`"/*/"` のような
    /// 重なりは1行で閉じたブロックコメントとして扱う。
    pub fn classify(&mut self, trimmed: &str) -> bool {
        if self.in_block_comment {
            if trimmed.contains("*/") {
                self.in_block_comment = false;
            }
            return true;
        }

        if trimmed.starts_with("/*") {
            self.in_block_comment = !trimmed.contains("*/");
            return true;
        }

        trimmed.starts_with("//")
    }

    #[must_use]
    pub const fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    pub fn reset(&mut self) {
        self.in_block_comment = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment() {
        let mut t = BlockCommentTracker::new();
        assert!(t.classify("// comment"));
        assert!(!t.in_block_comment());
        assert!(!t.classify("int x = 1;"));
    }

    #[test]
    fn test_multi_line_block() {
        let mut t = BlockCommentTracker::new();
        assert!(t.classify("/* start"));
        assert!(t.in_block_comment());
        assert!(t.classify("middle"));
        assert!(t.in_block_comment());
        assert!(t.classify("end */"));
        assert!(!t.in_block_comment());
        assert!(!t.classify("real_code();"));
    }

    #[test]
    fn test_single_line_block() {
        let mut t = BlockCommentTracker::new();
        assert!(t.classify("/* inline */"));
        assert!(!t.in_block_comment());
        assert!(!t.classify("x = 1;"));
    }

    #[test]
    fn test_overlapping_marker_closes() {
        // "/*/" contains "*/" from offset 1, so the block closes on the same line
        let mut t = BlockCommentTracker::new();
        assert!(t.classify("/*/"));
        assert!(!t.in_block_comment());
    }

    #[test]
    fn test_inside_block_everything_is_comment() {
        let mut t = BlockCommentTracker::new();
        assert!(t.classify("/* start"));
        // Lines that would otherwise be code or line comments
        assert!(t.classify("const x = 1;"));
        assert!(t.classify("// nested line comment"));
        assert!(t.in_block_comment());
        assert!(t.classify("done */ trailing"));
        assert!(!t.in_block_comment());
    }

    #[test]
    fn test_closer_without_opener_is_not_comment() {
        let mut t = BlockCommentTracker::new();
        assert!(!t.classify("x = a */ b;"));
        assert!(!t.in_block_comment());
    }

    #[test]
    fn test_reset() {
        let mut t = BlockCommentTracker::new();
        t.classify("/* start");
        assert!(t.in_block_comment());
        t.reset();
        assert!(!t.in_block_comment());
        assert!(!t.classify("code();"));
    }
}
