use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asmstat", version, about = "Assembly statistics from a FASTA file")]
pub struct Cli {
    /// Input FASTA file
    pub input: PathBuf,

    /// Report this name instead of the input path
    #[arg(long)]
    pub name: Option<String>,

    /// Log progress details to stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
