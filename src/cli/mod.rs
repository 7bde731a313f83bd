//! Command-line interface for circ-reconcile.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **rotate**: Rotate the long-read consensus onto the short-read consensus start
//! - **statistics**: Report positions where two aligned sequences differ
//!
//! ## Usage
//!
//! ```text
//! # Rotate in place (record 0 = short-read, record 1 = long-read consensus)
//! circ-reconcile rotate combined.fasta
//!
//! # Write the rotated pair elsewhere
//! circ-reconcile rotate combined.fasta --output rotated.fasta
//!
//! # After aligning rotated.fasta externally
//! circ-reconcile statistics aligned.fasta --format json
//! ```

use clap::{Parser, Subcommand};

pub mod rotate;
pub mod statistics;

#[derive(Parser)]
#[command(name = "circ-reconcile")]
#[command(version)]
#[command(about = "Reconcile short-read and long-read consensus sequences of a circular genome")]
#[command(
    long_about = "circ-reconcile brings a long-read consensus into register with a short-read consensus of the same circular molecule.\n\n- rotate: finds where the short-read consensus starts inside the long-read consensus (on either strand) and rotates the long-read consensus to start there\n- statistics: lists the positions where the two sequences differ once they have been aligned"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rotate the second record of a FASTA file to start where the first begins
    Rotate(rotate::RotateArgs),

    /// Report mismatching positions between the two records of an aligned FASTA file
    Statistics(statistics::StatisticsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
