use crate::core::error::{AsmError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw bytes of the input file.
///
/// Regular files are memory-mapped read-only; anything unmappable (pipes,
/// special files) falls back to an owned buffer.
pub enum SourceBytes {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl SourceBytes {
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| AsmError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        // SAFETY: read-only file mapping.
        match unsafe { Mmap::map(&file) } {
            Ok(mmap) => Ok(SourceBytes::Mapped(mmap)),
            Err(_) => {
                let mut buf = Vec::new();
                file.read_to_end(&mut buf).map_err(|e| AsmError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                Ok(SourceBytes::Owned(buf))
            }
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            SourceBytes::Mapped(mmap) => mmap,
            SourceBytes::Owned(buf) => buf,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}
