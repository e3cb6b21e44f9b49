use crate::cli::args::Cli;
use crate::core::fasta;
use crate::core::io::SourceBytes;
use crate::core::stats::AssemblyStats;
use crate::report;
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use std::io::{self, BufWriter, Write};

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    init_log(if cli.verbose { 3 } else { 2 });
    run(cli)
}

fn init_log(log_max_level: usize) {
    stderrlog::new()
        .module(module_path!())
        .quiet(false)
        .verbosity(log_max_level)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .unwrap();
}

fn run(cli: Cli) -> Result<()> {
    if cli.input.as_os_str() == "-" {
        bail!("stdin is not supported; provide a FASTA file path");
    }

    let file_name = cli
        .name
        .unwrap_or_else(|| cli.input.display().to_string());

    info!("Loading file {}", cli.input.display());
    let source = SourceBytes::open(&cli.input)?;
    debug!("{} bytes loaded", source.len());
    let assembly = fasta::scan(source.bytes())?;
    debug!("{} contigs parsed", assembly.contigs.len());

    info!("Calculating values");
    let stats = AssemblyStats::compute(&assembly)?;

    let stdout = io::stdout();
    let mut w = BufWriter::new(stdout.lock());
    report::tsv::write(&mut w, &file_name, &stats)?;
    w.flush().context("failed to write report")?;

    info!("Finished");
    Ok(())
}
