use crate::core::error::{AsmError, Result};
use crate::core::io::SourceBytes;
use memchr::memchr;
use std::path::Path;

/// One sequence record.
///
/// The statistics engine consumes only `length`; the header text is kept
/// for callers that want it.
#[derive(Clone, Debug)]
pub struct Contig {
    pub name: String,
    pub length: u64,
}

/// Nucleotide composition aggregated across all contigs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Composition {
    pub at: u64,
    pub gc: u64,
    pub n: u64,
}

/// Parser output: the ordered contig list plus global composition counts.
///
/// Read-only once produced; the statistics engine never mutates it.
#[derive(Clone, Debug)]
pub struct Assembly {
    pub contigs: Vec<Contig>,
    pub composition: Composition,
}

/// Parse a FASTA file from disk.
pub fn scan_file(path: &Path) -> Result<Assembly> {
    let source = SourceBytes::open(path)?;
    scan(source.bytes())
}

/// Parse FASTA bytes into per-contig lengths and global composition.
///
/// The input must start with a `>` header; each header line runs through its
/// terminating line feed. Sequence bytes are classified per character:
/// `A/a/T/t`, `C/c/G/g` and `N/n` count toward the current contig's length
/// and the matching composition counter, line terminators are elided, and
/// anything else aborts the parse. A `>` at the start of a line finalizes
/// the current contig and opens the next one; end of input finalizes the
/// last contig even without a trailing newline.
///
/// # Errors
///
/// [`AsmError::MalformedHeader`] if the input is empty, does not start with
/// `>`, or a header line is truncated before its line feed.
/// [`AsmError::UnrecognizedCharacter`] on any byte outside the accepted
/// alphabet; the whole parse fails, no partial result is returned.
pub fn scan(bytes: &[u8]) -> Result<Assembly> {
    if bytes.first() != Some(&b'>') {
        return Err(AsmError::MalformedHeader { offset: 0 });
    }

    let mut contigs = Vec::new();
    let mut composition = Composition::default();
    let mut pos = 0usize;

    while pos < bytes.len() {
        // bytes[pos] is the '>' of the current header.
        let header_end = match memchr(b'\n', &bytes[pos..]) {
            Some(rel) => pos + rel,
            None => return Err(AsmError::MalformedHeader { offset: pos }),
        };
        let mut name = &bytes[pos + 1..header_end];
        if let Some((&b'\r', rest)) = name.split_last() {
            name = rest;
        }
        let name = String::from_utf8_lossy(name).into_owned();
        pos = header_end + 1;

        let mut length = 0u64;
        let mut line_start = true;
        while pos < bytes.len() {
            let b = bytes[pos];
            if line_start && b == b'>' {
                break;
            }
            match b {
                b'\n' => line_start = true,
                b'\r' => {}
                b'A' | b'a' | b'T' | b't' => {
                    composition.at += 1;
                    length += 1;
                    line_start = false;
                }
                b'C' | b'c' | b'G' | b'g' => {
                    composition.gc += 1;
                    length += 1;
                    line_start = false;
                }
                b'N' | b'n' => {
                    composition.n += 1;
                    length += 1;
                    line_start = false;
                }
                byte => {
                    return Err(AsmError::UnrecognizedCharacter { byte, offset: pos });
                }
            }
            pos += 1;
        }
        contigs.push(Contig { name, length });
    }

    Ok(Assembly {
        contigs,
        composition,
    })
}
