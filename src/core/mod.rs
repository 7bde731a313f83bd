//! Core data types for circular sequence reconciliation.
//!
//! - [`SequenceRecord`]: An immutable named nucleotide sequence
//! - [`RecordPair`]: The reference (short-read) and target (long-read) records
//! - [`Orientation`]: Strand of the target relative to the reference
//! - [`dna`]: Complement tables for the IUPAC nucleotide alphabet
//!
//! [`SequenceRecord`]: record::SequenceRecord
//! [`RecordPair`]: record::RecordPair
//! [`Orientation`]: types::Orientation

pub mod dna;
pub mod record;
pub mod types;
