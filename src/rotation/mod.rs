//! Rotation of a long-read consensus onto a short-read consensus.
//!
//! Both records describe the same circular molecule but the long-read
//! assembler picks its own start position and strand. The [`Rotator`] finds
//! where the reference begins inside the target and moves the target's start
//! there.
//!
//! ## Algorithm
//!
//! 1. Take the first `k` bases of the reference as an anchor (`k = 30`)
//! 2. Look for the anchor in the target, then in its reverse complement
//! 3. On a hit, rotate the matching strand so the anchor starts at position 0
//! 4. Otherwise shrink `k` by one and retry, down to a floor of 10
//!
//! Shrinking trades specificity for tolerance to sequencing errors near the
//! start of the long-read assembly.
//!
//! ## Example
//!
//! ```rust
//! use circ_reconcile::core::record::{RecordPair, SequenceRecord};
//! use circ_reconcile::rotation::{RotationConfig, RotationResult, Rotator};
//!
//! let pair = RecordPair::new(
//!     SequenceRecord::new("short", "TTTACGTACGTGGG"),
//!     SequenceRecord::new("long", "GTGGGTTTACGTACG"),
//! );
//!
//! let rotation = Rotator::new(RotationConfig::default()).rotate(&pair);
//!
//! assert!(matches!(rotation.result, RotationResult::Found(_)));
//! assert_eq!(rotation.pair.target.sequence, b"TTTACGTACGGTGGG".to_vec());
//! ```

pub mod engine;
pub mod search;

pub use engine::{rotate_file, RotateError, Rotation, RotationResult, Rotator};
pub use search::{AnchorMatch, AnchorSearch, SearchState};

use crate::utils::validation::{validate_anchor_range, ValidationError};

/// Default length of the first anchor tried
pub const DEFAULT_INITIAL_ANCHOR_LEN: usize = 30;

/// Default shortest anchor tried before giving up
pub const DEFAULT_MIN_ANCHOR_LEN: usize = 10;

/// Configuration for the anchor search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    /// Anchor length of the first attempt
    pub initial_anchor_len: usize,
    /// Shortest anchor length attempted (inclusive)
    pub min_anchor_len: usize,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            initial_anchor_len: DEFAULT_INITIAL_ANCHOR_LEN,
            min_anchor_len: DEFAULT_MIN_ANCHOR_LEN,
        }
    }
}

impl RotationConfig {
    /// Check the anchor lengths form a usable range
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the minimum is below 10 bases or exceeds
    /// the initial anchor length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_anchor_range(self.initial_anchor_len, self.min_anchor_len)
    }

    /// Upper bound on the number of anchors tried
    pub fn max_attempts(&self) -> usize {
        self.initial_anchor_len
            .saturating_sub(self.min_anchor_len)
            .saturating_add(1)
    }
}
