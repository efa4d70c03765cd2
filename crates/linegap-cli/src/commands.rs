use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::{ColoredString, Colorize};
use linegap_compare::{
    default_export_name, export_to, render_json, render_line, summary_label, Comparator, ComparisonReport,
    DiffCursor, OverallVerdict, Source, SourceSet, SourceStatus,
};
use linegap_diff::{DiffKind, DiffRecord, LineDiff};

use crate::cli::*;
use crate::config;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let comparator = Comparator::new(config::resolve(&cli)?)?;
    match cli.command {
        Command::Diff(args) => cmd_diff(&comparator, args, &cli.format),
        Command::Compare(args) => cmd_compare(&comparator, args, &cli.format),
        Command::Export(args) => cmd_export(&comparator, args),
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn cmd_diff(comparator: &Comparator, args: DiffArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let baseline = read_text(&args.baseline)?;
    let candidate = read_text(&args.candidate)?;
    let diff = comparator.differ().compare(&baseline, &candidate);

    if let OutputFormat::Json = format {
        println!("{}", render_json(&diff)?);
        return Ok(());
    }

    if args.changes_only {
        print_changes(&diff);
    } else {
        for record in &diff.records {
            println!("{}", format_record(record));
        }
    }
    print_stats(&diff);
    Ok(())
}

fn cmd_compare(comparator: &Comparator, args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let baseline_name = args
        .baseline
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "baseline".into());
    let mut sources = SourceSet::new(Source::new(baseline_name, read_text(&args.baseline)?));
    for (name, path) in &args.candidates {
        sources.add_candidate(name.clone(), read_text(path)?)?;
    }

    let report = comparator.compare(&sources);
    let detail = if args.detail || args.focus.is_some() {
        comparator.detail(&sources, args.focus.as_deref())?
    } else {
        None
    };

    if let OutputFormat::Json = format {
        let value = serde_json::json!({ "report": report, "detail": detail });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_report(&report);
    if let Some(detail) = detail {
        println!("\n{} {} vs {}", "Detail:".bold(), report.baseline.bold(), detail.source.cyan().bold());
        print_changes(&detail.diff);
        print_stats(&detail.diff);
    }
    Ok(())
}

fn cmd_export(comparator: &Comparator, args: ExportArgs) -> anyhow::Result<()> {
    let baseline = read_text(&args.baseline)?;
    let candidate = read_text(&args.candidate)?;
    let records = comparator.differ().diff(&baseline, &candidate);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_export_name(chrono::Local::now().date_naive())));
    export_to(&output, &records).with_context(|| format!("failed to export to {}", output.display()))?;
    println!("{} Exported {} lines to {}", "✓".green().bold(), records.len(), output.display().to_string().bold());
    Ok(())
}

fn print_report(report: &ComparisonReport) {
    if !report.active {
        println!("Baseline {} is empty; nothing to compare.", report.baseline.bold());
        return;
    }
    println!("Baseline: {}", report.baseline.bold());
    for source in &report.sources {
        let status = match (&source.status, &source.stats) {
            (SourceStatus::Empty, _) => "empty".dimmed(),
            (SourceStatus::Identical, _) => "identical".green(),
            (SourceStatus::Different { changes }, Some(stats)) => {
                format!("{changes} differences ({})", summary_label(stats)).red()
            }
            (SourceStatus::Different { changes }, None) => format!("{changes} differences").red(),
        };
        println!("  {:<12} {}", source.name, status);
    }

    match &report.overall {
        OverallVerdict::Insufficient => {}
        OverallVerdict::AllIdentical { sources } => {
            println!("\n{} {} all identical", "✓".green().bold(), sources.join(" / ").bold());
        }
        OverallVerdict::Gap { identical, different } => {
            println!();
            if !identical.is_empty() {
                println!("{} {} identical", "✓".green(), identical.join(" / "));
            }
            println!("{} Gap found in [{}]", "⚠".yellow().bold(), different.join(", ").red().bold());
        }
    }
}

fn print_changes(diff: &LineDiff) {
    let mut cursor = DiffCursor::new(&diff.records);
    if cursor.is_empty() {
        println!("{}", "No differences.".green());
        return;
    }
    for _ in 0..cursor.len() {
        let Some(idx) = cursor.next() else { break };
        let hint = cursor.hint().unwrap_or_default();
        println!("{} {}", format!("[{hint}]").dimmed(), format_record(&diff.records[idx]));
    }
}

fn print_stats(diff: &LineDiff) {
    let stats = &diff.stats;
    println!(
        "\n{} {}  {} {}  {} {}  {} {}  ({} / {} lines)",
        "added:".green(),
        stats.added,
        "removed:".red(),
        stats.removed,
        "modified:".yellow(),
        stats.modified,
        "unchanged:".dimmed(),
        stats.unchanged,
        diff.baseline_lines,
        diff.candidate_lines,
    );
    if stats.identical {
        println!("{} Identical", "✓".green().bold());
    } else {
        println!("{} {} differences", "✗".red().bold(), stats.changes());
    }
}

fn format_record(record: &DiffRecord) -> ColoredString {
    let line = render_line(record);
    match record.kind() {
        DiffKind::Unchanged => line.normal(),
        DiffKind::Added => line.green(),
        DiffKind::Removed => line.red(),
        DiffKind::Modified => line.yellow(),
    }
}
