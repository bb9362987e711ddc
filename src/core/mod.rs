//! Core data types.
//!
//! - [`ProbeRecord`](probe::ProbeRecord): a named probe sequence
//! - [`AlignmentRecord`](alignment::AlignmentRecord): one line of bowtie output
//! - [`MappingTable`](mapping::MappingTable): an insertion-ordered one-to-many table
//!
//! ## Locus IDs
//!
//! Reference transcript models are named `geneID.suffix`, e.g. `AT1G01010.1`.
//! Alignments to any model of a gene are reported against the gene ID, so
//! several models of one gene collapse into a single locus.

pub mod alignment;
pub mod mapping;
pub mod probe;
