use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::Orientation;
use crate::rotation::{
    rotate_file, RotationConfig, RotationResult, DEFAULT_INITIAL_ANCHOR_LEN,
    DEFAULT_MIN_ANCHOR_LEN,
};

#[derive(Args)]
pub struct RotateArgs {
    /// FASTA file holding the short-read consensus followed by the long-read consensus.
    /// Rewritten in place unless --output is given
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write the rotated pair here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Length of the first anchor taken from the start of the short-read consensus
    #[arg(long = "initial-k", default_value_t = DEFAULT_INITIAL_ANCHOR_LEN)]
    pub initial_anchor_len: usize,

    /// Shortest anchor tried before giving up (at least 10)
    #[arg(long = "min-k", default_value_t = DEFAULT_MIN_ANCHOR_LEN)]
    pub min_anchor_len: usize,
}

impl RotateArgs {
    fn config(&self) -> RotationConfig {
        RotationConfig {
            initial_anchor_len: self.initial_anchor_len,
            min_anchor_len: self.min_anchor_len,
        }
    }
}

/// Execute rotate subcommand
///
/// Not finding a rotation point is reported, not returned as an error.
///
/// # Errors
///
/// Returns an error if the anchor settings are invalid, or the input cannot be
/// parsed or the output written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let result = rotate_file(&args.input, args.output.as_deref(), args.config())?;

    if verbose {
        eprintln!(
            "Searched anchors of length {} down to {}",
            args.initial_anchor_len, args.min_anchor_len
        );
    }

    match format {
        OutputFormat::Text => print_text_result(&args, &result),
        OutputFormat::Json => print_json_result(&args, &result)?,
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

fn output_path(args: &RotateArgs) -> &PathBuf {
    args.output.as_ref().unwrap_or(&args.input)
}

fn print_text_result(args: &RotateArgs, result: &RotationResult) {
    println!("Rotation Results");
    println!("{}", "=".repeat(60));
    println!("\nInput: {}", args.input.display());

    match result {
        RotationResult::Found(found) => {
            println!("Output: {}", output_path(args).display());
            println!("  Status: rotated");
            println!("  Offset: {}", found.offset);
            println!("  Orientation: {}", found.orientation);
            println!("  Anchor length: {}", found.anchor_len);
            if found.orientation == Orientation::ReverseComplement {
                println!("\nNote: the target sequence had to be reverse complemented.");
            }
        }
        RotationResult::NotFound => {
            println!("  Status: rotation failed");
            println!(
                "\nNo rotation point found with anchors of length {} to {}; sequence left unmodified.",
                args.initial_anchor_len, args.min_anchor_len
            );
            println!("Manual review of the long-read consensus is recommended.");
        }
    }
}

fn print_json_result(args: &RotateArgs, result: &RotationResult) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "output": output_path(args).display().to_string(),
        "initial_anchor_len": args.initial_anchor_len,
        "min_anchor_len": args.min_anchor_len,
        "result": result,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(result: &RotationResult) {
    println!("status\toffset\torientation\tanchor_len");
    match result {
        RotationResult::Found(found) => println!(
            "found\t{}\t{}\t{}",
            found.offset, found.orientation, found.anchor_len
        ),
        RotationResult::NotFound => println!("not_found\t.\t.\t."),
    }
}
