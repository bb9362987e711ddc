use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::{print_summary, OutputFormat, RunSummary};
use crate::parsing::fasta::write_probes;
use crate::parsing::open_input;
use crate::parsing::tsv::{ProbeTableReader, TableLayout};

#[derive(Args)]
pub struct TabToFastaArgs {
    /// Tab-separated table with the probe names and sequences
    #[arg(required = true)]
    pub table: PathBuf,

    /// Whether the first line is a header (1 for yes, 0 for no)
    #[arg(required = true, action = clap::ArgAction::Set, value_parser = parse_flag)]
    pub has_header: bool,

    /// Column number (starting with 1) holding the probe names
    #[arg(required = true)]
    pub probe_column: NonZeroUsize,

    /// Column number (starting with 1) holding the sequences
    #[arg(required = true)]
    pub sequence_column: NonZeroUsize,

    /// FASTA file where the sequences will be written
    #[arg(required = true)]
    pub output: PathBuf,
}

fn parse_flag(s: &str) -> Result<bool, String> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(format!("expected 0 or 1, got '{s}'")),
    }
}

#[derive(Debug, Serialize)]
struct ConversionSummary {
    output: String,
    header_removed: bool,
    probes: usize,
}

impl RunSummary for ConversionSummary {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("output", self.output.clone()),
            ("header_removed", self.header_removed.to_string()),
            ("probes", self.probes.to_string()),
        ]
    }
}

/// Execute TABTOFASTA mode
///
/// # Errors
///
/// Returns an error if the table cannot be read, a line lacks one of the
/// requested columns, or the FASTA file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TabToFastaArgs, format: OutputFormat) -> anyhow::Result<()> {
    let layout = TableLayout {
        has_header: args.has_header,
        probe_column: args.probe_column,
        sequence_column: args.sequence_column,
    };

    let reader = ProbeTableReader::new(open_input(&args.table)?, layout)?;
    let header_removed = reader.header().is_some();

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    let probes = write_probes(&mut writer, reader)?;
    writer.flush()?;

    info!("converted sequence table to fasta ({probes} probes)");

    let summary = ConversionSummary {
        output: args.output.display().to_string(),
        header_removed,
        probes,
    };
    print_summary(&summary, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("0"), Ok(false));
        assert_eq!(parse_flag("1"), Ok(true));
        assert!(parse_flag("yes").is_err());
        assert!(parse_flag("2").is_err());
    }
}
