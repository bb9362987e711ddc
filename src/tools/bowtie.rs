//! Command lines for the bowtie short-read aligner.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::tools::ToolCommand;

/// Default executable names, resolved on `PATH`
pub const BOWTIE_BUILD: &str = "bowtie-build";
pub const BOWTIE: &str = "bowtie";

/// `bowtie-build` over a FASTA file
#[derive(Debug, Clone)]
pub struct BowtieBuild {
    pub program: OsString,
    pub fasta: PathBuf,
    pub index: PathBuf,
}

impl BowtieBuild {
    pub fn new(fasta: impl Into<PathBuf>, index: impl Into<PathBuf>) -> Self {
        Self {
            program: BOWTIE_BUILD.into(),
            fasta: fasta.into(),
            index: index.into(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }
}

impl ToolCommand for BowtieBuild {
    fn program(&self) -> &OsString {
        &self.program
    }

    /// `-f -q -o 0 <fasta> <index>`: FASTA input, quiet, offrate 0
    fn args(&self) -> Vec<OsString> {
        vec![
            "-f".into(),
            "-q".into(),
            "-o".into(),
            "0".into(),
            self.fasta.clone().into(),
            self.index.clone().into(),
        ]
    }
}

/// Alignment reporting parameters passed to `bowtie`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignParams {
    /// `-v`: mismatches allowed over the whole probe (bowtie accepts 0-3)
    pub mismatches: u8,

    /// `-m`: probes with more reportable alignments than this are suppressed
    pub max_alignments: u32,

    /// `-p`: bowtie worker threads
    pub threads: u32,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            mismatches: 3,
            max_alignments: 10,
            threads: 4,
        }
    }
}

/// `bowtie` search of a probe FASTA against an index
#[derive(Debug, Clone)]
pub struct BowtieAlign {
    pub program: OsString,
    pub index: PathBuf,
    pub probes: PathBuf,
    pub unaligned: PathBuf,
    pub aligned: PathBuf,
    pub params: AlignParams,
}

impl BowtieAlign {
    pub fn new(
        index: impl Into<PathBuf>,
        probes: impl Into<PathBuf>,
        unaligned: impl Into<PathBuf>,
        aligned: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: BOWTIE.into(),
            index: index.into(),
            probes: probes.into(),
            unaligned: unaligned.into(),
            aligned: aligned.into(),
            params: AlignParams::default(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: AlignParams) -> Self {
        self.params = params;
        self
    }
}

impl ToolCommand for BowtieAlign {
    fn program(&self) -> &OsString {
        &self.program
    }

    // All alignments in the best mismatch stratum, timing on stderr.
    fn args(&self) -> Vec<OsString> {
        vec![
            "-v".into(),
            self.params.mismatches.to_string().into(),
            "-m".into(),
            self.params.max_alignments.to_string().into(),
            "-a".into(),
            "--best".into(),
            "--strata".into(),
            "-p".into(),
            self.params.threads.to_string().into(),
            "-t".into(),
            self.index.clone().into(),
            "-f".into(),
            self.probes.clone().into(),
            "--un".into(),
            self.unaligned.clone().into(),
            self.aligned.clone().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(args: &[OsString]) -> String {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_build_args() {
        let build = BowtieBuild::new("cdna.fa", "idx/cdna");
        assert_eq!(build.program, "bowtie-build");
        assert_eq!(joined(&build.args()), "-f -q -o 0 cdna.fa idx/cdna");
    }

    #[test]
    fn test_align_default_args() {
        let align = BowtieAlign::new("idx/cdna", "probes.fa", "un.fa", "aligned.txt");
        assert_eq!(align.program, "bowtie");
        assert_eq!(
            joined(&align.args()),
            "-v 3 -m 10 -a --best --strata -p 4 -t idx/cdna -f probes.fa --un un.fa aligned.txt"
        );
    }

    #[test]
    fn test_align_custom_params_and_program() {
        let align = BowtieAlign::new("i", "p.fa", "u.fa", "a.txt")
            .with_program("/opt/bowtie/bowtie")
            .with_params(AlignParams {
                mismatches: 1,
                max_alignments: 1,
                threads: 16,
            });
        assert_eq!(align.program, "/opt/bowtie/bowtie");
        assert_eq!(
            joined(&align.args()),
            "-v 1 -m 1 -a --best --strata -p 16 -t i -f p.fa --un u.fa a.txt"
        );
        assert_eq!(align.to_command().get_program(), "/opt/bowtie/bowtie");
    }
}
