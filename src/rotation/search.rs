//! Adaptive anchor search.
//!
//! The search is an explicit bounded state machine:
//!
//! ```text
//! Searching(k) --match--------------> Found(AnchorMatch)
//! Searching(k) --no match, k > min--> Searching(k - 1)
//! Searching(k) --no match, k == min-> Exhausted
//! ```
//!
//! Starting from `k = initial`, at most `initial - min + 1` anchors are tried.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::Orientation;
use crate::rotation::RotationConfig;

/// Where an anchor was found in the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorMatch {
    /// Zero-based start of the anchor in the target (or its reverse complement)
    pub offset: usize,
    /// Which strand of the target contained the anchor
    pub orientation: Orientation,
    /// Length of the anchor that matched
    pub anchor_len: usize,
}

/// State of the adaptive anchor search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// About to look for an anchor of this length
    Searching(usize),
    /// Terminal: the anchor was located
    Found(AnchorMatch),
    /// Terminal: no anchor length down to the minimum matched
    Exhausted,
}

/// First occurrence of `needle` in `haystack`.
///
/// An empty needle, or one longer than the haystack, never matches.
#[must_use]
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Search for a prefix of the reference inside the target, on either strand.
pub struct AnchorSearch<'a> {
    reference: &'a [u8],
    target: &'a [u8],
    target_rc: &'a [u8],
    min_anchor_len: usize,
}

impl<'a> AnchorSearch<'a> {
    /// `target_rc` must be the reverse complement of `target`.
    pub fn new(
        reference: &'a [u8],
        target: &'a [u8],
        target_rc: &'a [u8],
        config: &RotationConfig,
    ) -> Self {
        Self {
            reference,
            target,
            target_rc,
            min_anchor_len: config.min_anchor_len,
        }
    }

    /// Advance the search by one transition. Terminal states are returned as-is.
    pub fn step(&self, state: SearchState) -> SearchState {
        let SearchState::Searching(k) = state else {
            return state;
        };

        if let Some(found) = self.try_anchor(k) {
            return SearchState::Found(found);
        }

        if k > self.min_anchor_len {
            debug!("No match for anchor of length {k}, shrinking");
            SearchState::Searching(k - 1)
        } else {
            debug!("No match for anchor of length {k}, search exhausted");
            SearchState::Exhausted
        }
    }

    /// Look for `reference[..k]` in the target, forward strand first.
    ///
    /// A forward hit always wins over a reverse-complement hit at the same `k`.
    fn try_anchor(&self, k: usize) -> Option<AnchorMatch> {
        // Anchor longer than the reference: nothing to search with at this length
        let anchor = self.reference.get(..k)?;

        if let Some(offset) = find_subsequence(self.target, anchor) {
            return Some(AnchorMatch {
                offset,
                orientation: Orientation::Forward,
                anchor_len: k,
            });
        }

        find_subsequence(self.target_rc, anchor).map(|offset| AnchorMatch {
            offset,
            orientation: Orientation::ReverseComplement,
            anchor_len: k,
        })
    }

    /// Drive the state machine from `initial_anchor_len` to a terminal state.
    ///
    /// Returns the match, or `None` once the search is exhausted.
    pub fn run(&self, initial_anchor_len: usize) -> Option<AnchorMatch> {
        let mut state = SearchState::Searching(initial_anchor_len.max(self.min_anchor_len));
        loop {
            state = match self.step(state) {
                SearchState::Found(found) => return Some(found),
                SearchState::Exhausted => return None,
                searching @ SearchState::Searching(_) => searching,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dna::reverse_complement;

    fn search_config(initial: usize, min: usize) -> RotationConfig {
        RotationConfig {
            initial_anchor_len: initial,
            min_anchor_len: min,
        }
    }

    #[test]
    fn test_find_subsequence() {
        assert_eq!(find_subsequence(b"GTGGGTTTACG", b"TTTA"), Some(5));
        assert_eq!(find_subsequence(b"AAAA", b"AA"), Some(0));
        assert_eq!(find_subsequence(b"ACGT", b"TT"), None);
        assert_eq!(find_subsequence(b"ACGT", b""), None);
        assert_eq!(find_subsequence(b"AC", b"ACGT"), None);
    }

    #[test]
    fn test_step_found_forward() {
        let target = b"GTGGGTTTACGTACG";
        let rc = reverse_complement(target);
        let search = AnchorSearch::new(b"TTTACGTACGTGGG", target, &rc, &search_config(10, 10));

        let state = search.step(SearchState::Searching(10));
        assert_eq!(
            state,
            SearchState::Found(AnchorMatch {
                offset: 5,
                orientation: Orientation::Forward,
                anchor_len: 10,
            })
        );
    }

    #[test]
    fn test_step_shrinks_then_exhausts() {
        let target = b"CCCCCCCCCCCCCCCCCCCC";
        let rc = reverse_complement(target);
        let search = AnchorSearch::new(b"AAAAAAAAAAAAAAAAAAAA", target, &rc, &search_config(12, 10));

        assert_eq!(
            search.step(SearchState::Searching(12)),
            SearchState::Searching(11)
        );
        assert_eq!(
            search.step(SearchState::Searching(10)),
            SearchState::Exhausted
        );
        assert_eq!(search.step(SearchState::Exhausted), SearchState::Exhausted);
    }

    #[test]
    fn test_forward_preferred_over_reverse_complement() {
        // The target is its own reverse complement, so both strands match at offset 0
        let target = b"AATTCCGGAATT";
        let rc = reverse_complement(target);
        assert_eq!(rc, target.to_vec());

        let search = AnchorSearch::new(b"AATTCCGGAATT", target, &rc, &search_config(12, 10));
        match search.run(12) {
            Some(m) => assert_eq!(m.orientation, Orientation::Forward),
            None => panic!("Expected a match"),
        }
    }

    #[test]
    fn test_reverse_complement_match() {
        let reference = b"AAACCCGGGTTTAG";
        let target = reverse_complement(b"TTAAACCCGGGTTTAGCC");
        let rc = reverse_complement(&target);
        let search = AnchorSearch::new(reference, &target, &rc, &search_config(14, 10));

        assert_eq!(
            search.run(14),
            Some(AnchorMatch {
                offset: 2,
                orientation: Orientation::ReverseComplement,
                anchor_len: 14,
            })
        );
    }

    #[test]
    fn test_anchor_longer_than_reference_shrinks() {
        // Reference of 12 bases: k = 30..=13 cannot form an anchor
        let reference = b"GATTACAGATTA";
        let target = b"CCCCGATTACAGATTACCCC";
        let rc = reverse_complement(target);
        let search = AnchorSearch::new(reference, target, &rc, &search_config(30, 10));

        assert_eq!(
            search.run(30),
            Some(AnchorMatch {
                offset: 4,
                orientation: Orientation::Forward,
                anchor_len: 12,
            })
        );
    }

    #[test]
    fn test_shrinks_past_sequencing_error() {
        // Error at reference position 12 means only anchors <= 12 match
        let reference = b"ACGTTGCAAGCTAGGCTTACG";
        let target = b"TTTTTACGTTGCAAGCTTGGCTTACG";
        let rc = reverse_complement(target);
        let search = AnchorSearch::new(reference, target, &rc, &search_config(20, 10));

        assert_eq!(
            search.run(20),
            Some(AnchorMatch {
                offset: 5,
                orientation: Orientation::Forward,
                anchor_len: 12,
            })
        );
    }

    #[test]
    fn test_short_target_exhausts() {
        let target = b"ACGTACG";
        let rc = reverse_complement(target);
        let search = AnchorSearch::new(b"ACGTACGTACGTACG", target, &rc, &search_config(30, 10));
        assert_eq!(search.run(30), None);
    }
}
