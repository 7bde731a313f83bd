//! Centralized validation and helper functions.

use crate::core::dna::is_nucleotide;

/// Shortest anchor the rotation search may use
pub const MIN_ALLOWED_ANCHOR_LEN: usize = 10;

/// Count symbols outside the IUPAC nucleotide alphabet.
///
/// # Examples
///
/// ```
/// use circ_reconcile::utils::validation::count_invalid_symbols;
///
/// assert_eq!(count_invalid_symbols(b"ACGTN-"), 0);
/// assert_eq!(count_invalid_symbols(b"ACXT*"), 2);
/// ```
#[must_use]
pub fn count_invalid_symbols(sequence: &[u8]) -> usize {
    sequence.iter().filter(|&&b| !is_nucleotide(b)).count()
}

/// Anchor length validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Minimum anchor length must be at least {MIN_ALLOWED_ANCHOR_LEN}, got {0}")]
    AnchorTooShort(usize),
    #[error("Initial anchor length {initial} is below the minimum anchor length {min}")]
    AnchorRangeInverted { initial: usize, min: usize },
}

/// Validate the anchor length range used by the rotation search.
///
/// # Errors
///
/// Returns `ValidationError::AnchorTooShort` if `min` is below
/// [`MIN_ALLOWED_ANCHOR_LEN`], or
/// `ValidationError::AnchorRangeInverted` if `initial < min`.
pub fn validate_anchor_range(initial: usize, min: usize) -> Result<(), ValidationError> {
    if min < MIN_ALLOWED_ANCHOR_LEN {
        return Err(ValidationError::AnchorTooShort(min));
    }
    if initial < min {
        return Err(ValidationError::AnchorRangeInverted { initial, min });
    }
    Ok(())
}
