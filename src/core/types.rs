use serde::{Deserialize, Serialize};

/// Strand of the target relative to the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Target already reads in the reference's direction
    Forward,
    /// Target had to be reverse complemented to match the reference
    ReverseComplement,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::ReverseComplement => write!(f, "reverse-complement"),
        }
    }
}
