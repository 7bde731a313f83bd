//! # circ-reconcile
//!
//! A library for reconciling two consensus sequences of the same circular
//! genome: one polished from short reads, one assembled from long reads.
//!
//! Long-read assemblers choose an arbitrary start position on a circular
//! molecule and may report it on either strand. Before the two consensus
//! sequences can be aligned and compared, the long-read sequence has to be
//! rotated (and possibly reverse complemented) so both start at the same base.
//!
//! ## Features
//!
//! - **Adaptive anchoring**: Shrinks the search anchor from 30 to 10 bases to tolerate
//!   sequencing errors at the start of the long-read consensus
//! - **Strand detection**: Searches the reverse complement when the forward strand misses
//! - **In-place rewriting**: Atomically rewrites the FASTA with the rotated sequence
//! - **Difference reporting**: Lists every mismatching column of an aligned pair
//!
//! ## Example
//!
//! ```rust,no_run
//! use circ_reconcile::diff::statistics;
//! use circ_reconcile::rotation::{rotate_file, RotationConfig};
//! use std::path::Path;
//!
//! // Rotate the long-read consensus in place
//! let result = rotate_file(Path::new("combined.fasta"), None, RotationConfig::default()).unwrap();
//! println!("{result:?}");
//!
//! // ...align externally, then compare
//! let report = statistics(Path::new("aligned.fasta")).unwrap();
//! println!("{} differences at {:?}", report.count(), report.positions);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence records, strand types and complement tables
//! - [`parsing`]: FASTA reading and atomic writing
//! - [`rotation`]: Adaptive anchor search and circular rotation
//! - [`diff`]: Positional difference reports
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod diff;
pub mod parsing;
pub mod rotation;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::record::{RecordPair, SequenceRecord};
pub use crate::core::types::Orientation;
pub use diff::{DiffReport, Difference, DifferenceKind};
pub use rotation::{RotationConfig, RotationResult, Rotator};
