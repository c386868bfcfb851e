// src/args.rs
use crate::options::OutputFormat;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "classify_lines",
    version,
    about = "ソースコード行の分類/集計ツール"
)]
pub struct Args {
    /// 対象ファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// 拡張子の代わりに使う言語タグ (例: js, java)
    #[arg(long)]
    pub language: Option<String>,
}
