use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::diff::{statistics, DiffReport, DifferenceKind};

#[derive(Args)]
pub struct StatisticsArgs {
    /// Aligned FASTA file holding the two sequences to compare (equal length)
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute statistics subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the sequences differ in length.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StatisticsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let report = statistics(&args.input)?;

    if verbose {
        let summary = report.summary();
        eprintln!(
            "Compared {} columns: {} substitutions, {} insertions, {} deletions",
            report.length, summary.substitutions, summary.insertions, summary.deletions
        );
    }

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&args, &report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &DiffReport) {
    println!("Number of differences: {}", report.count());
    println!("Positions: {:?}", report.positions);
}

fn print_json_report(args: &StatisticsArgs, report: &DiffReport) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "length": report.length,
        "count": report.count(),
        "identity": report.identity(),
        "summary": report.summary(),
        "positions": report.positions,
        "differences": report.differences,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(report: &DiffReport) {
    println!("position\treference\ttarget\tkind");
    for diff in &report.differences {
        let kind = match diff.kind {
            DifferenceKind::Substitution => "substitution",
            DifferenceKind::Insertion => "insertion",
            DifferenceKind::Deletion => "deletion",
        };
        println!(
            "{}\t{}\t{}\t{kind}",
            diff.position,
            char::from(diff.reference),
            char::from(diff.target)
        );
    }
}
