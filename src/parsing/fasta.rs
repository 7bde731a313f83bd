//! Reading and writing the two-record FASTA files used by every command.
//!
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use noodles::fasta;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::{RecordPair, SequenceRecord};
use crate::utils::validation::count_invalid_symbols;

/// Number of records every input file must hold
pub const EXPECTED_RECORDS: usize = 2;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Expected exactly {EXPECTED_RECORDS} FASTA records, found {0}")]
    RecordCount(usize),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read the reference and target records from a FASTA file.
///
/// Record 0 becomes the reference and record 1 the target.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::RecordCount` unless the file holds exactly two
/// records.
pub fn read_record_pair(path: &Path) -> Result<RecordPair, ParseError> {
    let records = read_records(path)?;
    debug!(
        path = %path.display(),
        records = records.len(),
        "Read FASTA records"
    );
    records_to_pair(records)
}

/// Read every record from a FASTA file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Noodles`
/// if a record is malformed.
pub fn read_records(path: &Path) -> Result<Vec<SequenceRecord>, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let description = record
            .description()
            .map(|d| String::from_utf8_lossy(d).to_string());
        let sequence = record.sequence().as_ref().to_vec();

        let invalid = count_invalid_symbols(&sequence);
        if invalid > 0 {
            warn!("Record '{name}' contains {invalid} non-nucleotide symbols");
        }

        let mut parsed = SequenceRecord::new(name, sequence);
        parsed.description = description;
        records.push(parsed);
    }

    Ok(records)
}

/// Split parsed records into a reference/target pair
///
/// # Errors
///
/// Returns `ParseError::RecordCount` unless there are exactly two records.
pub fn records_to_pair(records: Vec<SequenceRecord>) -> Result<RecordPair, ParseError> {
    if records.len() != EXPECTED_RECORDS {
        return Err(ParseError::RecordCount(records.len()));
    }

    let mut iter = records.into_iter();
    match (iter.next(), iter.next()) {
        (Some(reference), Some(target)) => Ok(RecordPair::new(reference, target)),
        _ => Err(ParseError::InvalidFormat(
            "Reference and target records missing".to_string(),
        )),
    }
}

/// Render records as FASTA bytes using the noodles writer
fn render_records(records: &[&SequenceRecord]) -> Result<Vec<u8>, ParseError> {
    let mut buf = Vec::new();

    {
        let mut writer = fasta::io::Writer::new(&mut buf);
        for record in records {
            let definition = fasta::record::Definition::new(
                record.name.clone(),
                record.description.clone().map(Into::into),
            );
            let sequence = fasta::record::Sequence::from(record.sequence.clone());
            writer.write_record(&fasta::Record::new(definition, sequence))?;
        }
    }

    Ok(buf)
}

/// Write records to `path`, replacing any existing file.
///
/// The output is staged in a temporary file next to the destination and moved
/// into place once fully written, so a failed write leaves the previous
/// contents intact. Destinations ending in `.gz`/`.bgz` are gzip compressed.
///
/// An existing destination keeps its permissions, and a symlinked destination
/// is written through: the link stays in place and its target is replaced.
///
/// # Errors
///
/// Returns `ParseError::Io` if the temporary file cannot be created, written,
/// or moved over the destination.
pub fn write_records(path: &Path, records: &[&SequenceRecord]) -> Result<(), ParseError> {
    let rendered = render_records(records)?;

    let path = match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => std::fs::canonicalize(path)?,
        _ => path.to_path_buf(),
    };
    let existing_permissions = std::fs::metadata(&path).ok().map(|m| m.permissions());

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;

    if is_gzipped(&path) {
        let mut encoder = GzEncoder::new(staged.as_file_mut(), Compression::default());
        encoder.write_all(&rendered)?;
        encoder.finish()?;
    } else {
        staged.write_all(&rendered)?;
    }
    if let Some(permissions) = existing_permissions {
        staged.as_file().set_permissions(permissions)?;
    }
    staged.as_file().sync_all()?;

    staged.persist(&path).map_err(|e| ParseError::Io(e.error))?;
    debug!(path = %path.display(), records = records.len(), "Wrote FASTA records");

    Ok(())
}

/// Write a reference/target pair, reference first
///
/// # Errors
///
/// See [`write_records`].
pub fn write_record_pair(path: &Path, pair: &RecordPair) -> Result<(), ParseError> {
    write_records(path, &[&pair.reference, &pair.target])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn write_temp(content: &[u8], suffix: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(suffix).unwrap();
        temp.write_all(content).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_read_record_pair() {
        let temp = write_temp(
            b">short_read consensus\nACGTACGT\nACGT\n>long_read\nGGGG\n",
            ".fa",
        );

        let pair = read_record_pair(temp.path()).unwrap();
        assert_eq!(pair.reference.name, "short_read");
        assert_eq!(pair.reference.description.as_deref(), Some("consensus"));
        assert_eq!(pair.reference.sequence, b"ACGTACGTACGT".to_vec());
        assert_eq!(pair.target.name, "long_read");
        assert_eq!(pair.target.sequence, b"GGGG".to_vec());
    }

    #[test]
    fn test_read_single_record_fails() {
        let temp = write_temp(b">only\nACGT\n", ".fa");
        let result = read_record_pair(temp.path());
        assert!(matches!(result, Err(ParseError::RecordCount(1))));
    }

    #[test]
    fn test_read_three_records_fails() {
        let temp = write_temp(b">a\nACGT\n>b\nACGT\n>c\nACGT\n", ".fa");
        let result = read_record_pair(temp.path());
        assert!(matches!(result, Err(ParseError::RecordCount(3))));
    }

    #[test]
    fn test_read_empty_file_fails() {
        let temp = write_temp(b"", ".fa");
        let result = read_record_pair(temp.path());
        assert!(matches!(result, Err(ParseError::RecordCount(0))));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_record_pair(Path::new("/nonexistent/pair.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_write_then_read_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.fasta");
        let pair = RecordPair::new(
            SequenceRecord::new("sr", "ACGTACGT").with_description("short reads"),
            SequenceRecord::new("lr", "TTTTGGGG"),
        );

        write_record_pair(&path, &pair).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, ">sr short reads\nACGTACGT\n>lr\nTTTTGGGG\n");
        assert_eq!(read_record_pair(&path).unwrap(), pair);
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = write_temp(b">old\nAAAA\n>older\nCCCC\n", ".fa");
        let pair = RecordPair::new(
            SequenceRecord::new("new", "GG"),
            SequenceRecord::new("newer", "TT"),
        );

        write_record_pair(temp.path(), &pair).unwrap();

        let text = std::fs::read_to_string(temp.path()).unwrap();
        assert_eq!(text, ">new\nGG\n>newer\nTT\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.fasta");
        std::fs::write(&path, ">sr\nAAAA\n>lr\nCCCC\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let pair = read_record_pair(&path).unwrap();
        write_record_pair(&path, &pair).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.fasta");
        let link = dir.path().join("link.fasta");
        std::fs::write(&real, ">sr\nAAAA\n>lr\nCCCC\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let pair = RecordPair::new(
            SequenceRecord::new("sr", "GGGG"),
            SequenceRecord::new("lr", "TTTT"),
        );
        write_record_pair(&link, &pair).unwrap();

        let link_meta = std::fs::symlink_metadata(&link).unwrap();
        assert!(link_meta.file_type().is_symlink());
        assert_eq!(
            std::fs::read_to_string(&real).unwrap(),
            ">sr\nGGGG\n>lr\nTTTT\n"
        );
    }

    #[test]
    fn test_gzipped_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.fa.gz");
        let pair = RecordPair::new(
            SequenceRecord::new("sr", "ACGT"),
            SequenceRecord::new("lr", "CGTA"),
        );

        write_record_pair(&path, &pair).unwrap();

        // Must really be compressed
        let mut raw = Vec::new();
        std::fs::File::open(&path)
            .unwrap()
            .read_to_end(&mut raw)
            .unwrap();
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);

        assert_eq!(read_record_pair(&path).unwrap(), pair);
    }
}
