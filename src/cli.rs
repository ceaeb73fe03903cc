//! Command-line interface for structscan.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;

use crate::extract::Extractor;
use crate::inventory::Extraction;
use crate::templates;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Structural code inventory extraction.
///
/// Structscan parses source files with grammar-aware queries and reports
/// the structural entities each file declares - functions, classes,
/// interfaces, imports, annotations, enums - as JSON, one report per file.
/// A downstream diff of two reports shows what kinds of entities changed
/// between revisions without brittle text diffing.
#[derive(Parser)]
#[command(name = "structscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract structural inventories from source files
    Extract(ExtractArgs),
    /// List languages with registered query templates
    Languages,
}

/// Arguments for the extract command.
#[derive(Parser)]
pub struct ExtractArgs {
    /// Source files to extract
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Language identifier for all inputs (default: infer from extension)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// One file's report in the JSON output.
#[derive(Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub extraction: Extraction,
}

/// Map a file extension to a language identifier. The library never
/// guesses languages; that resolution belongs to the caller, which here
/// is this CLI.
fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension().and_then(|e| e.to_str())?;
    match ext {
        "java" => Some("java"),
        "py" => Some("python"),
        "js" | "jsx" | "mjs" => Some("javascript"),
        "ts" | "tsx" => Some("typescript"),
        "go" => Some("go"),
        "rs" => Some("rust"),
        _ => None,
    }
}

/// Extract every input file, in parallel. Each file either yields a report
/// or an error message; one bad file never blocks the others.
fn collect_reports(args: &ExtractArgs) -> Vec<Result<FileReport, String>> {
    args.paths
        .par_iter()
        .map(|path| {
            let source = std::fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
            let language = match &args.language {
                Some(lang) => lang.clone(),
                None => language_for_path(path)
                    .ok_or_else(|| {
                        format!("{}: cannot infer language from extension", path.display())
                    })?
                    .to_string(),
            };
            let extraction = Extractor::new()
                .extract(&language, &source)
                .map_err(|e| format!("{}: {}", path.display(), e))?;
            Ok(FileReport {
                file: path.display().to_string(),
                extraction,
            })
        })
        .collect()
}

/// Run the extract command.
pub fn run_extract(args: &ExtractArgs) -> anyhow::Result<i32> {
    templates::register_builtins();

    let mut reports = Vec::new();
    let mut failed = false;
    for result in collect_reports(args) {
        match result {
            Ok(report) => reports.push(report),
            Err(message) => {
                eprintln!("Error: {message}");
                failed = true;
            }
        }
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{json}");

    Ok(if failed { EXIT_ERROR } else { EXIT_SUCCESS })
}

/// Run the languages command.
pub fn run_languages() -> anyhow::Result<i32> {
    for language in templates::languages() {
        println!("{language}");
    }
    Ok(EXIT_SUCCESS)
}
