//! Reader for bowtie's default eight-column alignment output.

use std::io::BufRead;
use std::path::Path;

use crate::core::alignment::{AlignmentRecord, ALIGNMENT_FIELD_COUNT};
use crate::core::mapping::ProbeLocusMappings;
use crate::parsing::{open_input, ParseError};

/// Build probe/locus mappings from a bowtie alignment file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::FieldCount` for the first line without exactly eight fields.
pub fn parse_aligned_file(path: &Path) -> Result<ProbeLocusMappings, ParseError> {
    parse_aligned_reader(open_input(path)?)
}

/// Build probe/locus mappings from bowtie alignment lines.
///
/// Every line must have exactly eight tab-separated fields; the first one
/// that does not aborts the whole read.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure or `ParseError::FieldCount` on a
/// malformed line.
pub fn parse_aligned_reader<R: BufRead>(reader: R) -> Result<ProbeLocusMappings, ParseError> {
    let mut mappings = ProbeLocusMappings::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let record =
            AlignmentRecord::from_fields(&line).map_err(|found| ParseError::FieldCount {
                line: i + 1,
                found,
                expected: ALIGNMENT_FIELD_COUNT,
            })?;

        mappings.add(record.probe, record.gene_id());
    }

    Ok(mappings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tsv(table: &crate::core::mapping::MappingTable) -> String {
        let mut out = Vec::new();
        table.write_tsv(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_models_collapse_to_gene() {
        let aligned = "p1\t+\tmodel1.2\t10\tACGT\tIIII\t0\t\n\
                       p1\t+\tmodel1.5\t42\tACGT\tIIII\t0\t\n";
        let mappings = parse_aligned_reader(aligned.as_bytes()).unwrap();

        assert_eq!(mappings.records, 2);
        assert_eq!(tsv(&mappings.probe_to_locus), "p1\tmodel1\n");
        assert_eq!(tsv(&mappings.locus_to_probe), "model1\tp1\n");
    }

    #[test]
    fn test_many_to_many() {
        let aligned = "p1\t+\tg1.1\t1\tACGT\tIIII\t0\t\n\
                       p1\t-\tg2.1\t7\tACGT\tIIII\t0\t3:A>G\n\
                       p2\t+\tg1.3\t9\tTTTT\tIIII\t0\t\n";
        let mappings = parse_aligned_reader(aligned.as_bytes()).unwrap();

        assert_eq!(tsv(&mappings.probe_to_locus), "p1\tg1;g2\np2\tg1\n");
        assert_eq!(tsv(&mappings.locus_to_probe), "g1\tp1;p2\ng2\tp1\n");
    }

    #[test]
    fn test_seven_fields_is_fatal() {
        let aligned = "p1\t+\tg1.1\t1\tACGT\tIIII\t0\t\n\
                       p2\t+\tg1.1\t1\tACGT\tIIII\t0\n";
        match parse_aligned_reader(aligned.as_bytes()) {
            Err(ParseError::FieldCount {
                line,
                found,
                expected,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 7);
                assert_eq!(expected, 8);
            }
            other => panic!("expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let mappings = parse_aligned_reader(&b""[..]).unwrap();
        assert_eq!(mappings.records, 0);
        assert!(mappings.probe_to_locus.is_empty());
        assert!(mappings.locus_to_probe.is_empty());
    }
}
