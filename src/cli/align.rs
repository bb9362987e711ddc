use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{print_summary, OutputFormat, RunSummary, ToolPaths};
use crate::parsing::fasta::count_fasta_records;
use crate::tools::bowtie::{AlignParams, BowtieAlign};
use crate::tools::{ToolCommand, ToolSummary};

#[derive(Args)]
pub struct AlignArgs {
    /// Bowtie index name/path (see BUILD)
    #[arg(required = true)]
    pub index: PathBuf,

    /// FASTA file with the probe sequences
    #[arg(required = true)]
    pub probes: PathBuf,

    /// File where the unaligned sequences will be stored
    #[arg(required = true)]
    pub unaligned: PathBuf,

    /// File where the aligned sequences will be stored
    #[arg(required = true)]
    pub aligned: PathBuf,

    /// Mismatches allowed per alignment (bowtie -v)
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(0..=3))]
    pub mismatches: u8,

    /// Suppress probes with more reportable alignments than this (bowtie -m)
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_alignments: u32,

    /// Worker threads used by bowtie (bowtie -p)
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: u32,
}

#[derive(Debug, Serialize)]
struct AlignSummary {
    #[serde(flatten)]
    tool: ToolSummary,
    unaligned_probes: Option<usize>,
}

impl RunSummary for AlignSummary {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = self.tool.rows();
        rows.push((
            "unaligned_probes",
            self.unaligned_probes
                .map(|n| n.to_string())
                .unwrap_or_default(),
        ));
        rows
    }
}

/// Execute ALIGN mode
///
/// # Errors
///
/// Returns an error if bowtie cannot be started or exits unsuccessfully.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AlignArgs, tools: &ToolPaths, format: OutputFormat) -> anyhow::Result<()> {
    let params = AlignParams {
        mismatches: args.mismatches,
        max_alignments: args.max_alignments,
        threads: args.threads,
    };

    let output = BowtieAlign::new(&args.index, &args.probes, &args.unaligned, &args.aligned)
        .with_program(&tools.bowtie)
        .with_params(params)
        .run()?
        .check()?;

    info!("aligned sequences");

    // bowtie only creates the --un file when something failed to align
    let unaligned_probes = if args.unaligned.exists() {
        match count_fasta_records(&args.unaligned) {
            Ok(n) => {
                info!("{n} probes did not align");
                Some(n)
            }
            Err(e) => {
                warn!("could not read {}: {e}", args.unaligned.display());
                None
            }
        }
    } else {
        Some(0)
    };

    let summary = AlignSummary {
        tool: output.summary(),
        unaligned_probes,
    };
    print_summary(&summary, format)
}
