//! Nucleotide complement tables.
//!
//! Complements cover the four canonical bases, uracil, and the IUPAC
//! ambiguity codes. Letter case is preserved so soft-masked regions stay
//! soft-masked after reverse-complementing.

/// Complement a single nucleotide symbol.
///
/// Symbols outside the IUPAC nucleotide alphabet are returned unchanged.
///
/// # Examples
///
/// ```
/// use circ_reconcile::core::dna::complement_base;
///
/// assert_eq!(complement_base(b'A'), b'T');
/// assert_eq!(complement_base(b'r'), b'y');
/// assert_eq!(complement_base(b'N'), b'N');
/// ```
#[must_use]
pub const fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'a' => b't',
        b't' | b'u' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        b'r' => b'y',
        b'y' => b'r',
        b'k' => b'm',
        b'm' => b'k',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        // S, W, N, gaps and anything unrecognised are their own complement
        other => other,
    }
}

/// Reverse complement a nucleotide sequence into a new buffer.
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&b| complement_base(b)).collect()
}

/// Whether a symbol belongs to the IUPAC nucleotide alphabet (gaps included).
#[must_use]
pub fn is_nucleotide(base: u8) -> bool {
    matches!(
        base.to_ascii_uppercase(),
        b'A' | b'C'
            | b'G'
            | b'T'
            | b'U'
            | b'R'
            | b'Y'
            | b'K'
            | b'M'
            | b'S'
            | b'W'
            | b'B'
            | b'D'
            | b'H'
            | b'V'
            | b'N'
            | b'-'
            | b'.'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_canonical() {
        assert_eq!(reverse_complement(b"ATGCGATC"), b"GATCGCAT".to_vec());
        assert_eq!(reverse_complement(b"AAAA"), b"TTTT".to_vec());
        assert_eq!(reverse_complement(b""), Vec::<u8>::new());
    }

    #[test]
    fn test_reverse_complement_preserves_case() {
        assert_eq!(reverse_complement(b"acgTN"), b"NAcgt".to_vec());
    }

    #[test]
    fn test_ambiguity_codes() {
        assert_eq!(reverse_complement(b"RYKMBVDHSWN"), b"NWSDHBVKMRY".to_vec());
    }

    #[test]
    fn test_double_reverse_complement_is_identity() {
        let original = b"ACGTRYKMBVDHSWNacgt-";
        assert_eq!(reverse_complement(&reverse_complement(original)), original);
    }

    #[test]
    fn test_is_nucleotide() {
        assert!(is_nucleotide(b'A'));
        assert!(is_nucleotide(b'n'));
        assert!(is_nucleotide(b'-'));
        assert!(!is_nucleotide(b'X'));
        assert!(!is_nucleotide(b'*'));
    }
}
