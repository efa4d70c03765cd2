use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "linegap",
    about = "Whitespace-tolerant line comparison against a baseline",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with diff policy settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Similarity above which a mismatched pair counts as modified
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Lines probed ahead on each side to resynchronize after a mismatch
    #[arg(long, global = true)]
    pub lookahead: Option<usize>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare a candidate file against a baseline, line by line
    Diff(DiffArgs),
    /// Compare several named candidates against one baseline
    Compare(CompareArgs),
    /// Write the line diff of a candidate to a text file
    Export(ExportArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub baseline: PathBuf,
    pub candidate: PathBuf,
    /// Only print changed lines, numbered
    #[arg(long)]
    pub changes_only: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    pub baseline: PathBuf,
    /// Candidates as NAME=PATH
    #[arg(required = true, value_parser = parse_named_path)]
    pub candidates: Vec<(String, PathBuf)>,
    /// Show the line diff of this candidate (defaults to the first non-empty one)
    #[arg(long)]
    pub focus: Option<String>,
    /// Print the line diff of the focused candidate after the summary
    #[arg(long)]
    pub detail: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    pub baseline: PathBuf,
    pub candidate: PathBuf,
    /// Output path (defaults to diff_YYYY-MM-DD.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_named_path(raw: &str) -> Result<(String, PathBuf), String> {
    match raw.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got `{raw}`")),
    }
}
