/// Number of tab-separated columns in a bowtie default-format alignment line
pub const ALIGNMENT_FIELD_COUNT: usize = 8;

/// Returns the gene (locus) identifier of a transcript model identifier.
///
/// The gene ID is everything before the first `.`, so `AT1G01010.1` maps to
/// `AT1G01010`. Identifiers without a `.` are returned whole.
///
/// # Examples
///
/// ```
/// use probemap::core::alignment::gene_id;
///
/// assert_eq!(gene_id("AT1G01010.1"), "AT1G01010");
/// assert_eq!(gene_id("model1.2.3"), "model1");
/// assert_eq!(gene_id("orphan"), "orphan");
/// ```
#[must_use]
pub fn gene_id(model_id: &str) -> &str {
    model_id
        .split_once('.')
        .map_or(model_id, |(gene, _)| gene)
}

/// One line of bowtie output describing a single probe hit.
///
/// Fields are kept as the text bowtie wrote; only the row shape is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentRecord<'a> {
    /// Name of the aligned probe
    pub probe: &'a str,

    /// `+` or `-`
    pub strand: &'a str,

    /// Reference transcript model the probe aligned to
    pub model_id: &'a str,

    /// 0-based offset into the reference model
    pub position: &'a str,

    /// Probe sequence, reverse-complemented for `-` strand hits
    pub sequence: &'a str,

    /// Base qualities
    pub quality: &'a str,

    /// Number of other alignments with the same mismatch count
    pub mismatch_count: &'a str,

    /// Comma-separated mismatch descriptors, possibly empty
    pub conversions: &'a str,
}

impl<'a> AlignmentRecord<'a> {
    /// Split a line into its eight fields.
    ///
    /// Returns the number of fields found when the line does not have
    /// exactly [`ALIGNMENT_FIELD_COUNT`] of them.
    pub fn from_fields(line: &'a str) -> Result<Self, usize> {
        let fields: Vec<&str> = line.split('\t').collect();

        match fields.as_slice() {
            &[probe, strand, model_id, position, sequence, quality, mismatch_count, conversions] => {
                Ok(Self {
                    probe,
                    strand,
                    model_id,
                    position,
                    sequence,
                    quality,
                    mismatch_count,
                    conversions,
                })
            }
            other => Err(other.len()),
        }
    }

    /// Gene identifier derived from [`Self::model_id`]
    #[must_use]
    pub fn gene_id(&self) -> &'a str {
        gene_id(self.model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields() {
        let line = "p1\t+\tAT1G01010.1\t120\tACGTACGT\tIIIIIIII\t0\t";
        let record = AlignmentRecord::from_fields(line).unwrap();
        assert_eq!(record.probe, "p1");
        assert_eq!(record.strand, "+");
        assert_eq!(record.model_id, "AT1G01010.1");
        assert_eq!(record.position, "120");
        assert_eq!(record.conversions, "");
        assert_eq!(record.gene_id(), "AT1G01010");
    }

    #[test]
    fn test_from_fields_wrong_count() {
        assert_eq!(
            AlignmentRecord::from_fields("p1\t+\tm.1\t1\tACGT\tIIII\t0"),
            Err(7)
        );
        assert_eq!(
            AlignmentRecord::from_fields("p1\t+\tm.1\t1\tACGT\tIIII\t0\t\textra"),
            Err(9)
        );
        assert_eq!(AlignmentRecord::from_fields(""), Err(1));
    }

    #[test]
    fn test_gene_id_leading_dot() {
        assert_eq!(gene_id(".1"), "");
    }
}
