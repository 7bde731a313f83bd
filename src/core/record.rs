use serde::{Deserialize, Serialize};

use crate::core::dna;

/// A named nucleotide sequence read from a FASTA file.
///
/// Records are values: transformations such as [`SequenceRecord::rotated`] and
/// [`SequenceRecord::reverse_complement`] return new records and never touch
/// the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Identifier from the FASTA definition line
    pub name: String,

    /// Free text following the identifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Raw sequence bytes
    #[serde(with = "sequence_as_str")]
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Sequence as text, replacing any non-UTF-8 bytes
    pub fn sequence_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.sequence)
    }

    /// The same molecule read from the opposite strand.
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            sequence: dna::reverse_complement(&self.sequence),
        }
    }

    /// Move the start of a circular sequence to `offset`.
    ///
    /// Produces `seq[offset..] + seq[..offset]`. Offsets past the end wrap
    /// around the circle.
    #[must_use]
    pub fn rotated(&self, offset: usize) -> Self {
        let sequence = if self.sequence.is_empty() {
            Vec::new()
        } else {
            let offset = offset % self.sequence.len();
            let mut rotated = Vec::with_capacity(self.sequence.len());
            rotated.extend_from_slice(&self.sequence[offset..]);
            rotated.extend_from_slice(&self.sequence[..offset]);
            rotated
        };

        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            sequence,
        }
    }
}

/// The two records every command operates on, in file order.
///
/// Record 0 is the short-read consensus and is trusted for orientation and
/// start position; record 1 is the long-read consensus being reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPair {
    pub reference: SequenceRecord,
    pub target: SequenceRecord,
}

impl RecordPair {
    pub fn new(reference: SequenceRecord, target: SequenceRecord) -> Self {
        Self { reference, target }
    }

    /// Replace the target, keeping the reference
    #[must_use]
    pub fn with_target(&self, target: SequenceRecord) -> Self {
        Self {
            reference: self.reference.clone(),
            target,
        }
    }
}

mod sequence_as_str {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(sequence: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(sequence))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.into_bytes())
    }
}
