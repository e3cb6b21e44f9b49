use crate::core::error::{AsmError, Result};
use crate::core::fasta::Assembly;

/// Contigs strictly longer than this land in the over-10k bucket.
pub const LARGE_CONTIG_THRESHOLD: u64 = 10_000;

/// Aggregate assembly statistics. Immutable once computed.
#[derive(Clone, Debug)]
pub struct AssemblyStats {
    pub total_length: u64,
    pub total_length_over_10k: u64,
    pub contig_count: u64,
    pub contig_count_over_10k: u64,
    pub largest_contig: u64,
    pub n50: u64,
    pub l50: u64,
    pub aun: f64,
    pub gc_percent: f64,
    pub n_count: u64,
}

impl AssemblyStats {
    /// Compute statistics from a parsed assembly.
    ///
    /// The assembly is read-only; computing twice yields identical results.
    ///
    /// N50/L50 walk from the longest contig downward, accumulating lengths
    /// while the running sum is below `total_length / 2` (floor division).
    /// L50 is the number of contigs visited, N50 the length of the last
    /// contig added. When the walk adds nothing (all contigs empty), both
    /// are 0 and auN is 0. GC percentage is `NaN` when the assembly has no
    /// A/T/C/G bases at all.
    ///
    /// # Errors
    ///
    /// Returns [`AsmError::EmptyAssembly`] for an assembly with no contigs.
    pub fn compute(assembly: &Assembly) -> Result<Self> {
        if assembly.contigs.is_empty() {
            return Err(AsmError::EmptyAssembly);
        }

        let mut lengths: Vec<u64> = assembly.contigs.iter().map(|c| c.length).collect();
        lengths.sort_unstable();

        let total_length: u64 = lengths.iter().sum();
        let largest_contig = *lengths.last().unwrap();

        let mut total_length_over_10k = 0u64;
        let mut contig_count_over_10k = 0u64;
        for &len in &lengths {
            if len > LARGE_CONTIG_THRESHOLD {
                total_length_over_10k += len;
                contig_count_over_10k += 1;
            }
        }

        let half = total_length / 2;
        let mut running = 0u64;
        let mut l50 = 0u64;
        let mut n50 = 0u64;
        for &len in lengths.iter().rev() {
            if running >= half {
                break;
            }
            running += len;
            l50 += 1;
            n50 = len;
        }

        let aun = if total_length == 0 {
            0.0
        } else {
            lengths
                .iter()
                .map(|&l| (l as f64) * (l as f64))
                .sum::<f64>()
                / total_length as f64
        };

        let comp = assembly.composition;
        let classified = comp.at + comp.gc;
        let gc_percent = if classified == 0 {
            f64::NAN
        } else {
            100.0 * comp.gc as f64 / classified as f64
        };

        Ok(AssemblyStats {
            total_length,
            total_length_over_10k,
            contig_count: lengths.len() as u64,
            contig_count_over_10k,
            largest_contig,
            n50,
            l50,
            aun,
            gc_percent,
            n_count: comp.n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fasta::{self, Composition, Contig};

    fn assembly(lengths: &[u64]) -> Assembly {
        Assembly {
            contigs: lengths
                .iter()
                .map(|&length| Contig {
                    name: String::new(),
                    length,
                })
                .collect(),
            composition: Composition::default(),
        }
    }

    #[test]
    fn two_contig_assembly() {
        let parsed = fasta::scan(b">seq1\nACGT\n>seq2\nACGTACGTAC\n").unwrap();
        let stats = AssemblyStats::compute(&parsed).unwrap();
        assert_eq!(stats.total_length, 14);
        assert_eq!(stats.contig_count, 2);
        assert_eq!(stats.largest_contig, 10);
        // Half of 14 is 7; the longest contig alone reaches it.
        assert_eq!(stats.n50, 10);
        assert_eq!(stats.l50, 1);
        assert_eq!(stats.n_count, 0);
        assert!((stats.gc_percent - 50.0).abs() < 1e-10);
        assert!((stats.aun - 116.0 / 14.0).abs() < 1e-10);
    }

    #[test]
    fn single_contig() {
        let stats = AssemblyStats::compute(&assembly(&[42])).unwrap();
        assert_eq!(stats.total_length, 42);
        assert_eq!(stats.largest_contig, 42);
        assert_eq!(stats.n50, 42);
        assert_eq!(stats.l50, 1);
    }

    #[test]
    fn n50_known_values() {
        // Sorted descending 10, 8, 6, 4, 2; total 30, half 15.
        // Cumulative 10 < 15, then 18 >= 15: N50 = 8, L50 = 2.
        let stats = AssemblyStats::compute(&assembly(&[2, 10, 4, 8, 6])).unwrap();
        assert_eq!(stats.n50, 8);
        assert_eq!(stats.l50, 2);
    }

    #[test]
    fn n50_uses_floor_of_odd_total() {
        // Total 7, half truncates to 3; the 4-contig alone reaches it.
        let stats = AssemblyStats::compute(&assembly(&[3, 4])).unwrap();
        assert_eq!(stats.n50, 4);
        assert_eq!(stats.l50, 1);
    }

    #[test]
    fn n50_is_an_existing_length() {
        let lengths = [7, 19, 3, 11, 2, 5];
        let stats = AssemblyStats::compute(&assembly(&lengths)).unwrap();
        assert!(lengths.contains(&stats.n50));
    }

    #[test]
    fn over_10k_threshold_is_strict() {
        let stats = AssemblyStats::compute(&assembly(&[10_000, 10_001, 500])).unwrap();
        assert_eq!(stats.contig_count_over_10k, 1);
        assert_eq!(stats.total_length_over_10k, 10_001);
    }

    #[test]
    fn empty_assembly_is_an_error() {
        assert!(matches!(
            AssemblyStats::compute(&assembly(&[])),
            Err(AsmError::EmptyAssembly)
        ));
    }

    #[test]
    fn all_empty_contigs_do_not_panic() {
        let stats = AssemblyStats::compute(&assembly(&[0, 0])).unwrap();
        assert_eq!(stats.total_length, 0);
        assert_eq!(stats.n50, 0);
        assert_eq!(stats.l50, 0);
        assert_eq!(stats.aun, 0.0);
    }

    #[test]
    fn gc_percent_undefined_without_atcg() {
        let parsed = fasta::scan(b">s\nNNNN\n").unwrap();
        let stats = AssemblyStats::compute(&parsed).unwrap();
        assert_eq!(stats.n_count, 4);
        assert!(stats.gc_percent.is_nan());
    }

    #[test]
    fn compute_does_not_mutate_input() {
        let parsed = assembly(&[5, 1, 9, 3]);
        let before: Vec<u64> = parsed.contigs.iter().map(|c| c.length).collect();
        let first = AssemblyStats::compute(&parsed).unwrap();
        let second = AssemblyStats::compute(&parsed).unwrap();
        let after: Vec<u64> = parsed.contigs.iter().map(|c| c.length).collect();
        assert_eq!(before, after);
        assert_eq!(first.n50, second.n50);
        assert_eq!(first.l50, second.l50);
        assert_eq!(first.total_length, second.total_length);
    }

    #[test]
    fn aun_weights_by_length() {
        // (100 + 100 + 400) / 40 = 15 for lengths 10, 10, 20.
        let stats = AssemblyStats::compute(&assembly(&[10, 10, 20])).unwrap();
        assert!((stats.aun - 15.0).abs() < 1e-10);
    }
}
