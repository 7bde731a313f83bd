//! Positional differences between two aligned sequences.
//!
//! Run after rotation and an external multiple-sequence alignment, when the
//! reference and target have equal length and share coordinates. No alignment
//! is performed here: unequal lengths are rejected.
//!
//! ## Example
//!
//! ```rust
//! use circ_reconcile::diff::DiffReport;
//!
//! let report = DiffReport::compute(b"ACGT", b"AGGT").unwrap();
//! assert_eq!(report.count(), 1);
//! assert_eq!(report.positions, vec![1]);
//! ```

pub mod report;

pub use report::{
    statistics, DiffError, DiffReport, DiffSummary, Difference, DifferenceKind, StatisticsError,
};
