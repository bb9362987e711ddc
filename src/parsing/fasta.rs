//! FASTA output for probe sets, and record counting for bowtie's `--un` files.
//!
//! Probes are written with the whole sequence on a single line, which is what
//! bowtie's `-f` mode expects for short reads.

use std::io::{BufRead, Write};
use std::path::Path;

use noodles::fasta;

use crate::core::probe::ProbeRecord;
use crate::parsing::{open_input, ParseError};

/// Write probes as two-line FASTA records and return how many were written.
///
/// Stops at the first error yielded by `probes`.
///
/// # Errors
///
/// Returns the first error from `probes`, or `ParseError::Io` if writing fails.
pub fn write_probes<W, I>(writer: &mut W, probes: I) -> Result<usize, ParseError>
where
    W: Write,
    I: IntoIterator<Item = Result<ProbeRecord, ParseError>>,
{
    let mut written = 0;
    for probe in probes {
        let probe = probe?;
        writeln!(writer, ">{}", probe.name)?;
        writeln!(writer, "{}", probe.sequence)?;
        written += 1;
    }
    Ok(written)
}

/// Count the records in a FASTA file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or is not valid FASTA.
pub fn count_fasta_records(path: &Path) -> Result<usize, ParseError> {
    let mut reader = fasta::io::Reader::new(open_input(path)?);
    count_records(&mut reader)
}

fn count_records<R: BufRead>(reader: &mut fasta::io::Reader<R>) -> Result<usize, ParseError> {
    let mut count = 0;
    for result in reader.records() {
        result?;
        count += 1;
    }
    Ok(count)
}
