//! Readers and writers for the plain-text formats this tool exchanges with bowtie.
//!
//! - **Probe tables**: tab-separated tables with a probe name and a sequence column
//! - **FASTA**: one `>name` line followed by one sequence line per probe
//! - **Bowtie alignments**: the eight-column default bowtie output
//!
//! Inputs whose name ends in `.gz` or `.bgz` are decompressed on the fly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod aligned;
pub mod fasta;
pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line} has {fields} field(s), column {column} is out of range")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        fields: usize,
    },

    #[error("Line {line} has {found} field(s), expected {expected}")]
    FieldCount {
        line: usize,
        found: usize,
        expected: usize,
    },
}

/// Check if the path names a gzip or bgzip compressed file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a text input, decompressing it when the name says it is compressed
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("probes.tsv.gz")));
        assert!(is_gzipped(Path::new("probes.tsv.BGZ")));
        assert!(!is_gzipped(Path::new("probes.tsv")));
    }

    #[test]
    fn test_open_gzipped_input() {
        let mut temp = NamedTempFile::with_suffix(".tsv.gz").unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"p1\tACGT\n").unwrap();
        temp.write_all(&encoder.finish().unwrap()).unwrap();
        temp.flush().unwrap();

        let lines: Vec<String> = open_input(temp.path())
            .unwrap()
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["p1\tACGT".to_string()]);
    }

    #[test]
    fn test_open_missing_input() {
        let result = open_input(Path::new("/nonexistent/probes.tsv"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
