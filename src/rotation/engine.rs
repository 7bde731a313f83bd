use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::record::RecordPair;
use crate::core::types::Orientation;
use crate::parsing::fasta::{read_record_pair, write_record_pair};
use crate::parsing::ParseError;
use crate::rotation::search::{AnchorMatch, AnchorSearch};
use crate::rotation::RotationConfig;
use crate::utils::validation::ValidationError;

#[derive(Error, Debug)]
pub enum RotateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid rotation settings: {0}")]
    Config(#[from] ValidationError),
}

/// Outcome of the anchor search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RotationResult {
    /// The anchor was located and the target rotated onto it
    Found(AnchorMatch),
    /// No anchor length matched either strand; the target is unchanged
    NotFound,
}

impl RotationResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            Self::Found(m) => Some(m.orientation),
            Self::NotFound => None,
        }
    }

    /// Whether applying this result leaves the target as it was
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Found(m) => m.offset == 0 && m.orientation == Orientation::Forward,
            Self::NotFound => true,
        }
    }
}

/// Search outcome together with the records it produced
#[derive(Debug, Clone)]
pub struct Rotation {
    pub result: RotationResult,
    /// Reference unchanged, target rotated (or untouched when not found)
    pub pair: RecordPair,
}

/// Rotates a target record onto the start of a reference record
#[derive(Debug, Clone, Default)]
pub struct Rotator {
    config: RotationConfig,
}

impl Rotator {
    pub fn new(config: RotationConfig) -> Self {
        Self { config }
    }

    /// Locate the reference start in the target and rotate the target onto it.
    ///
    /// The input pair is never modified; the returned pair holds new records.
    pub fn rotate(&self, pair: &RecordPair) -> Rotation {
        let target_rc = pair.target.reverse_complement();

        let search = AnchorSearch::new(
            &pair.reference.sequence,
            &pair.target.sequence,
            &target_rc.sequence,
            &self.config,
        );

        match search.run(self.config.initial_anchor_len) {
            Some(found) => {
                let rotated = match found.orientation {
                    Orientation::Forward => pair.target.rotated(found.offset),
                    Orientation::ReverseComplement => target_rc.rotated(found.offset),
                };

                Rotation {
                    result: RotationResult::Found(found),
                    pair: pair.with_target(rotated),
                }
            }
            None => Rotation {
                result: RotationResult::NotFound,
                pair: pair.clone(),
            },
        }
    }
}

/// Rotate the target record of a two-record FASTA file.
///
/// Writes the reference followed by the rotated target to `output`, or back
/// over `input` when no output is given. When rotating in place and the target
/// would be unchanged (no anchor found, or a forward match at offset 0), the
/// file is left untouched.
///
/// Failing to find an anchor is not an error: the result is returned as
/// [`RotationResult::NotFound`] so pipelines can flag the sample for review.
///
/// # Errors
///
/// Returns `RotateError::Config` for an invalid anchor range, or
/// `RotateError::Parse` if the input cannot be read or the output written.
pub fn rotate_file(
    input: &Path,
    output: Option<&Path>,
    config: RotationConfig,
) -> Result<RotationResult, RotateError> {
    config.validate()?;

    let pair = read_record_pair(input)?;
    debug!(
        reference = %pair.reference.name,
        reference_len = pair.reference.len(),
        target = %pair.target.name,
        target_len = pair.target.len(),
        max_attempts = config.max_attempts(),
        "Loaded sequences for rotation"
    );

    let rotation = Rotator::new(config).rotate(&pair);

    match &rotation.result {
        RotationResult::Found(found) => {
            if found.orientation == Orientation::ReverseComplement {
                warn!(
                    "Target '{}' required reverse-complementing to match the reference",
                    pair.target.name
                );
            }
            info!(
                "Rotated '{}' to offset {} ({}, anchor length {})",
                pair.target.name, found.offset, found.orientation, found.anchor_len
            );
        }
        RotationResult::NotFound => {
            warn!(
                "Rotation failed: no anchor of length {}..={} from '{}' found in '{}'; sequence left unmodified",
                config.min_anchor_len, config.initial_anchor_len, pair.reference.name, pair.target.name
            );
        }
    }

    match output {
        Some(path) => write_record_pair(path, &rotation.pair)?,
        None if rotation.result.is_noop() => {
            debug!("Target unchanged, not rewriting {}", input.display());
        }
        None => write_record_pair(input, &rotation.pair)?,
    }

    Ok(rotation.result)
}
