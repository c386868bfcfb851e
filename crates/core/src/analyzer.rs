// crates/core/src/analyzer.rs
use crate::error::Result;
use crate::language::classifier_trait::SyntaxClassifier;
use crate::language::get_classifier;
use crate::stats::AnalysisResult;

/// 1行の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// 空白行
    Blank,
    /// コメント行 (行コメントまたはブロックコメント)
    Comment,
    /// インポート文 (コード行としても数える)
    Import,
    /// 変数宣言 (コード行としても数える)
    VariableDeclaration,
    /// その他のコード行
    Code,
}

/// 行シーケンスを分類器で順に分類し、カウンタへ集計するアナライザ
///
/// ブロックコメント状態は行順と同期しているため、分類器は
/// ファイルごとに新しいインスタンスを渡すこと。
pub struct LineAnalyzer {
    syntax: Box<dyn SyntaxClassifier>,
}

impl LineAnalyzer {
    #[must_use]
    pub fn new(syntax: Box<dyn SyntaxClassifier>) -> Self {
        Self { syntax }
    }

    /// 1行を分類する
    ///
    /// 優先順位は固定: 空白 → コメント → インポート → 変数宣言 → コード。
    /// 先勝ちのため、コメント中のインポート風の行はコメントとして数える。
    /// 空白行は `is_comment` に渡さないので、ブロックコメント内の
    /// 空白行で状態が進むことはない。
    ///
    /// # Errors
    ///
    /// 分類器の述語が未実装の場合、`ClassifyError::NotImplemented` を
    /// そのまま伝播する (握りつぶしも代替もしない)。
    pub fn classify_line(&mut self, line: &str) -> Result<LineKind> {
        if self.syntax.is_blank(line) {
            return Ok(LineKind::Blank);
        }
        if self.syntax.is_comment(line) {
            return Ok(LineKind::Comment);
        }
        if self.syntax.is_import(line)? {
            return Ok(LineKind::Import);
        }
        if self.syntax.is_variable_declaration(line)? {
            return Ok(LineKind::VariableDeclaration);
        }
        Ok(LineKind::Code)
    }

    /// 行シーケンス全体を順に分類し、集計する
    ///
    /// 行のスキップや並べ替えはブロックコメント状態を実際のソースと
    /// 非同期にしてしまうため行わない。
    ///
    /// # Errors
    ///
    /// `classify_line` のエラーをそのまま返す。
    pub fn analyze<I, S>(&mut self, lines: I) -> Result<AnalysisResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = AnalysisResult::new();

        for line in lines {
            result.total += 1;
            match self.classify_line(line.as_ref())? {
                LineKind::Blank => result.blank += 1,
                LineKind::Comment => result.comments += 1,
                LineKind::Import => {
                    result.imports += 1;
                    result.code += 1;
                }
                LineKind::VariableDeclaration => {
                    result.variables += 1;
                    result.code += 1;
                }
                LineKind::Code => result.code += 1,
            }
        }

        Ok(result)
    }
}

/// 改行 (`\n` / `\r\n`) で行に分割する
///
/// 末尾の改行は最後に空要素を生み、その空要素も1行として数える。
/// `str::lines()` が末尾の空要素を捨てるのに対し、この挙動は
/// 分割規約として保持している。
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
}

/// ソース文字列全体を分類する
///
/// ファイルごとに新しい分類器を解決するエントリポイント。
///
/// # Errors
///
/// 未登録の拡張子は `ClassifyError::UnsupportedLanguage`、
/// 未実装の述語は `ClassifyError::NotImplemented` を返す。
pub fn analyze_source(content: &str, extension: &str) -> Result<AnalysisResult> {
    let syntax = get_classifier(extension)?;
    let mut analyzer = LineAnalyzer::new(syntax);
    analyzer.analyze(split_lines(content))
}
