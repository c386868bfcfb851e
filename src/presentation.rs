// src/presentation.rs
use crate::options::OutputFormat;
use classify_lines_core::stats::AnalysisResult;
use std::path::Path;

pub fn print_result(path: &Path, result: &AnalysisResult, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_table(path, result),
        OutputFormat::Json => print_json(result),
        OutputFormat::Csv => print_sv(path, result, ","),
        OutputFormat::Tsv => print_sv(path, result, "\t"),
    }
}

fn print_table(path: &Path, result: &AnalysisResult) {
    println!("classify_lines v{}", crate::VERSION);
    println!();
    println!("  CATEGORY         LINES");
    println!("------------------------");
    println!("  blank      {:>11}", result.blank);
    println!("  comments   {:>11}", result.comments);
    println!("  imports    {:>11}", result.imports);
    println!("  variables  {:>11}", result.variables);
    println!("  code       {:>11}", result.code);
    println!("---");
    println!("  total      {:>11}", result.total);
    println!();
    println!("[classify_lines] Completed: {}", path.display());
}

fn print_json(result: &AnalysisResult) {
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{json}");
    }
}

fn print_sv(path: &Path, result: &AnalysisResult, delimiter: &str) {
    let header = [
        "blank",
        "comments",
        "imports",
        "variables",
        "code",
        "total",
        "path",
    ]
    .join(delimiter);
    println!("{header}");

    let mut row = [
        result.blank,
        result.comments,
        result.imports,
        result.variables,
        result.code,
        result.total,
    ]
    .map(|v| v.to_string())
    .join(delimiter);

    row.push_str(delimiter);
    let path = path.display().to_string();
    if delimiter == "," && (path.contains(',') || path.contains('"') || path.contains('\n')) {
        let escaped = path.replace('"', "\"\"");
        row.push_str(&format!("\"{escaped}\""));
    } else {
        row.push_str(&path);
    }

    println!("{row}");
}
