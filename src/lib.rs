//! Assembly quality statistics from FASTA input.
//!
//! Parses a FASTA file into per-contig lengths and global nucleotide
//! composition, then derives the standard assembly metrics (total length,
//! N50, L50, auN, GC percentage).

pub mod cli;
pub mod core;
pub mod report;

pub use crate::core::error::AsmError;
pub use crate::core::fasta::{Assembly, Composition, Contig};
pub use crate::core::stats::AssemblyStats;
