use std::path::PathBuf;
use thiserror::Error;

/// Classified failures from the parser and statistics engine.
///
/// Every variant is terminal: the run aborts, there is no partial-result
/// or recovery mode.
#[derive(Debug, Error)]
pub enum AsmError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected '>' in a sequence header line (byte offset {offset})")]
    MalformedHeader { offset: usize },

    #[error("unrecognized character '{}' in a sequence line (byte offset {offset})", .byte.escape_ascii())]
    UnrecognizedCharacter { byte: u8, offset: usize },

    #[error("assembly contains no contigs")]
    EmptyAssembly,
}

pub type Result<T> = std::result::Result<T, AsmError>;
