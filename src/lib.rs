//! # probemap
//!
//! Map microarray probes to gene loci by aligning probe sequences against a
//! cDNA (transcript) set with the external bowtie aligner.
//!
//! The alignment itself is bowtie's job. This crate builds the bowtie command
//! lines, converts probe tables to FASTA, and turns bowtie's output into two
//! lookup tables: probe name to locus IDs, and locus ID to probe names.
//!
//! ## Example
//!
//! ```rust
//! use probemap::parsing::aligned::parse_aligned_reader;
//!
//! let aligned = "p1\t+\tAT1G01010.1\t10\tACGT\tIIII\t0\t\n\
//!                p1\t+\tAT1G01010.2\t12\tACGT\tIIII\t0\t\n";
//! let mappings = parse_aligned_reader(aligned.as_bytes()).unwrap();
//!
//! let mut out = Vec::new();
//! mappings.probe_to_locus.write_tsv(&mut out).unwrap();
//! assert_eq!(out, b"p1\tAT1G01010\n");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Probe, alignment record and mapping table types
//! - [`parsing`]: Probe table, FASTA and bowtie output readers and writers
//! - [`tools`]: External bowtie invocations with captured results
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod tools;

pub use crate::core::alignment::{gene_id, AlignmentRecord};
pub use crate::core::mapping::{MappingTable, ProbeLocusMappings};
pub use crate::core::probe::ProbeRecord;
pub use tools::{ToolCommand, ToolError, ToolOutput};
