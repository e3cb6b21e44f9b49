use crate::core::stats::AssemblyStats;
use anyhow::Result;
use std::io::Write;

/// Write the labeled tab-separated report.
///
/// auN and GC percentage are rendered with two decimals; everything else is
/// an integer count.
pub fn write<W: Write>(w: &mut W, file_name: &str, stats: &AssemblyStats) -> Result<()> {
    writeln!(w, "File name\t{}", file_name)?;
    writeln!(w, "Seq length\t{}", stats.total_length)?;
    writeln!(w, "Seq length >10k\t{}", stats.total_length_over_10k)?;
    writeln!(w, "Contig num\t{}", stats.contig_count)?;
    writeln!(w, "Contig num >10k\t{}", stats.contig_count_over_10k)?;
    writeln!(w, "Largest contig\t{}", stats.largest_contig)?;
    writeln!(w, "N50      \t{}", stats.n50)?;
    writeln!(w, "L50      \t{}", stats.l50)?;
    writeln!(w, "auN      \t{:.2}", stats.aun)?;
    writeln!(w, "GC percentage\t{:.2}", stats.gc_percent)?;
    writeln!(w, "Number of Ns\t{}", stats.n_count)?;
    Ok(())
}
