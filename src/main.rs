// src/main.rs
use clap::Parser;
use classify_lines::args::Args;
use classify_lines::error::Result;
use classify_lines::{filesystem, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let content = filesystem::read_source(&args.file)?;
    let tag = match &args.language {
        Some(tag) => tag.clone(),
        None => filesystem::extension_tag(&args.file)?,
    };

    let result = classify_lines_core::analyzer::analyze_source(&content, &tag)?;
    presentation::print_result(&args.file, &result, args.format);
    Ok(())
}
