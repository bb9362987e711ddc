use std::io::BufRead;
use std::num::NonZeroUsize;

use tracing::info;

use crate::core::probe::ProbeRecord;
use crate::parsing::ParseError;

/// Which columns of a probe table hold the probe name and the sequence.
///
/// Columns are 1-based, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// The first line is a header and is discarded
    pub has_header: bool,

    pub probe_column: NonZeroUsize,

    pub sequence_column: NonZeroUsize,
}

/// Reads [`ProbeRecord`]s from a tab-separated probe table, one per line.
///
/// Fields are split on `\t` with no trimming or quoting. A line with too few
/// fields for either configured column is an error.
pub struct ProbeTableReader<R> {
    lines: std::io::Lines<R>,
    layout: TableLayout,
    line_num: usize,
    header: Option<String>,
}

impl<R: BufRead> ProbeTableReader<R> {
    /// Create a reader, consuming the header line if the layout has one
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the header line cannot be read.
    pub fn new(reader: R, layout: TableLayout) -> Result<Self, ParseError> {
        let mut lines = reader.lines();
        let mut line_num = 0;
        let mut header = None;

        if layout.has_header {
            if let Some(line) = lines.next().transpose()? {
                info!("removed header: {line}");
                line_num = 1;
                header = Some(line);
            }
        }

        Ok(Self {
            lines,
            layout,
            line_num,
            header,
        })
    }

    /// The discarded header line, if one was present
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    fn parse_line(&self, line: &str) -> Result<ProbeRecord, ParseError> {
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |column: NonZeroUsize| {
            fields
                .get(column.get() - 1)
                .copied()
                .ok_or(ParseError::ColumnOutOfRange {
                    line: self.line_num,
                    column: column.get(),
                    fields: fields.len(),
                })
        };

        let name = field(self.layout.probe_column)?;
        let sequence = field(self.layout.sequence_column)?;
        Ok(ProbeRecord::new(name, sequence))
    }
}

impl<R: BufRead> Iterator for ProbeTableReader<R> {
    type Item = Result<ProbeRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.line_num += 1;
        Some(self.parse_line(&line))
    }
}
