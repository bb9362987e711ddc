use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::{print_summary, OutputFormat, RunSummary};
use crate::core::mapping::MappingTable;
use crate::parsing::aligned::parse_aligned_file;

#[derive(Args)]
pub struct ExtractArgs {
    /// File with the aligned sequences (see ALIGN)
    #[arg(required = true)]
    pub aligned: PathBuf,

    /// File for the probe name to locus ID mappings
    #[arg(required = true)]
    pub probe_to_locus: PathBuf,

    /// File for the locus ID to probe name mappings
    #[arg(required = true)]
    pub locus_to_probe: PathBuf,
}

#[derive(Debug, Serialize)]
struct ExtractSummary {
    alignments: usize,
    probes: usize,
    loci: usize,
}

impl RunSummary for ExtractSummary {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("alignments", self.alignments.to_string()),
            ("probes", self.probes.to_string()),
            ("loci", self.loci.to_string()),
        ]
    }
}

/// Execute EXTRACT mode
///
/// # Errors
///
/// Returns an error if the alignment file cannot be read, a line does not
/// have exactly eight fields, or either mapping file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mappings = parse_aligned_file(&args.aligned)?;
    info!("extracted mappings");

    write_table(&mappings.probe_to_locus, &args.probe_to_locus)?;
    write_table(&mappings.locus_to_probe, &args.locus_to_probe)?;

    let summary = ExtractSummary {
        alignments: mappings.records,
        probes: mappings.probe_to_locus.len(),
        loci: mappings.locus_to_probe.len(),
    };
    print_summary(&summary, format)
}

fn write_table(table: &MappingTable, path: &Path) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    table.write_tsv(&mut writer)?;
    writer.flush()?;
    Ok(())
}
