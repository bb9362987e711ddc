use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::{print_summary, OutputFormat, ToolPaths};
use crate::tools::bowtie::BowtieBuild;
use crate::tools::ToolCommand;

#[derive(Args)]
pub struct BuildArgs {
    /// cDNA sequence FASTA file
    #[arg(required = true)]
    pub fasta: PathBuf,

    /// Bowtie index name/path prefix to create
    #[arg(required = true)]
    pub index: PathBuf,
}

/// Execute BUILD mode
///
/// # Errors
///
/// Returns an error if bowtie-build cannot be started or exits unsuccessfully.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: BuildArgs, tools: &ToolPaths, format: OutputFormat) -> anyhow::Result<()> {
    let output = BowtieBuild::new(&args.fasta, &args.index)
        .with_program(&tools.bowtie_build)
        .run()?
        .check()?;

    info!("built bowtie index {}", args.index.display());
    print_summary(&output.summary(), format)
}
