//! FASTA input and output.
//!
//! Every command reads a file holding exactly two records:
//!
//! | Index | Role | Source |
//! |-------|------|--------|
//! | 0 | reference | short-read consensus, trusted orientation |
//! | 1 | target | long-read consensus, unknown rotation and strand |
//!
//! ## Example
//!
//! ```rust,no_run
//! use circ_reconcile::parsing::fasta::read_record_pair;
//! use std::path::Path;
//!
//! let pair = read_record_pair(Path::new("combined.fasta")).unwrap();
//! println!("{} vs {}", pair.reference.name, pair.target.name);
//! ```

pub mod fasta;

pub use fasta::ParseError;
