use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::parsing::fasta::read_record_pair;
use crate::parsing::ParseError;

/// Gap symbol written by multiple-sequence aligners
pub const GAP: u8 = b'-';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error(
        "Sequences must have equal length to be compared position by position \
         (reference: {reference}, target: {target}); align them first"
    )]
    LengthMismatch { reference: usize, target: usize },
}

#[derive(Error, Debug)]
pub enum StatisticsError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Diff(#[from] DiffError),
}

/// How the target differs from the reference at one alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    /// Both sequences have a residue, but not the same one
    Substitution,
    /// Gap in the reference: extra residue in the target
    Insertion,
    /// Gap in the target: residue missing from the target
    Deletion,
}

impl DifferenceKind {
    fn classify(reference: u8, target: u8) -> Self {
        if reference == GAP {
            Self::Insertion
        } else if target == GAP {
            Self::Deletion
        } else {
            Self::Substitution
        }
    }
}

/// One mismatching alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    /// Zero-based column
    pub position: usize,
    #[serde(with = "symbol_as_char")]
    pub reference: u8,
    #[serde(with = "symbol_as_char")]
    pub target: u8,
    pub kind: DifferenceKind,
}

/// Per-kind mismatch totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// Positions where two equal-length sequences disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Length of each compared sequence
    pub length: usize,
    /// Zero-based mismatching positions, ascending
    pub positions: Vec<usize>,
    /// Detail for each mismatching position, same order as `positions`
    pub differences: Vec<Difference>,
}

impl DiffReport {
    /// Compare two sequences column by column.
    ///
    /// Symbols are compared byte for byte, so case differences count as
    /// mismatches.
    ///
    /// # Errors
    ///
    /// Returns `DiffError::LengthMismatch` if the sequences differ in length.
    pub fn compute(reference: &[u8], target: &[u8]) -> Result<Self, DiffError> {
        if reference.len() != target.len() {
            return Err(DiffError::LengthMismatch {
                reference: reference.len(),
                target: target.len(),
            });
        }

        let differences: Vec<Difference> = reference
            .iter()
            .zip(target)
            .enumerate()
            .filter(|(_, (r, t))| r != t)
            .map(|(position, (&r, &t))| Difference {
                position,
                reference: r,
                target: t,
                kind: DifferenceKind::classify(r, t),
            })
            .collect();

        Ok(Self {
            length: reference.len(),
            positions: differences.iter().map(|d| d.position).collect(),
            differences,
        })
    }

    /// Number of mismatching positions
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_identical(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for diff in &self.differences {
            match diff.kind {
                DifferenceKind::Substitution => summary.substitutions += 1,
                DifferenceKind::Insertion => summary.insertions += 1,
                DifferenceKind::Deletion => summary.deletions += 1,
            }
        }
        summary
    }

    /// Fraction of columns that agree
    #[allow(clippy::cast_precision_loss)] // Sequence lengths well below 2^52
    pub fn identity(&self) -> f64 {
        if self.length == 0 {
            return 1.0;
        }
        1.0 - self.count() as f64 / self.length as f64
    }
}

/// Report the differences between the two records of an aligned FASTA file.
///
/// Read-only: the file is never modified.
///
/// # Errors
///
/// Returns `StatisticsError::Parse` if the file cannot be read or does not hold
/// exactly two records, or `StatisticsError::Diff` if their lengths differ.
pub fn statistics(path: &Path) -> Result<DiffReport, StatisticsError> {
    let pair = read_record_pair(path)?;
    debug!(
        reference = %pair.reference.name,
        target = %pair.target.name,
        length = pair.reference.len(),
        "Comparing aligned sequences"
    );

    let report = DiffReport::compute(&pair.reference.sequence, &pair.target.sequence)?;
    info!(
        "Found {} differences between '{}' and '{}'",
        report.count(),
        pair.reference.name,
        pair.target.name
    );

    Ok(report)
}

mod symbol_as_char {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(symbol: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(char::from(*symbol))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let c = char::deserialize(deserializer)?;
        u8::try_from(c).map_err(serde::de::Error::custom)
    }
}
