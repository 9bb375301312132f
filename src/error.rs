use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading FASTA input or writing the usage table.
#[derive(Debug, Error)]
pub enum CodonUsageError {
    /// Input directory does not exist.
    #[error("input directory does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Input path exists but is not a directory.
    #[error("input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A line handed to the header parser does not start with '>'.
    /// Only reachable when the parser is called directly with bad input.
    #[error("header line does not start with '>': {0:?}")]
    MalformedHeader(String),

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write usage table: {0}")]
    Csv(#[from] csv::Error),
}

impl CodonUsageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Closest `std::io::ErrorKind` for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::NotFound(_) => io::ErrorKind::NotFound,
            Self::NotADirectory(_) => io::ErrorKind::InvalidInput,
            Self::MalformedHeader(_) => io::ErrorKind::InvalidData,
            Self::Io { source, .. } => source.kind(),
            Self::Csv(_) => io::ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodonUsageError>;
