//! Indexer error types

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    // ── Configuration ───────────────────────────────────────
    #[error("cannot determine module path from {}: {reason}", .path.display())]
    Configuration { path: PathBuf, reason: String },

    // ── Load ────────────────────────────────────────────────
    #[error("{}:{line}:{column}: syntax error", .path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("{}: source is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    #[error("{}: expected package clause", .path.display())]
    MissingPackage { path: PathBuf },

    #[error("parser setup failed: {0}")]
    Parser(String),

    // ── I/O ─────────────────────────────────────────────────
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    // ── Line counting ───────────────────────────────────────
    #[error("{} is neither a directory nor a Go source file", .0.display())]
    NotGoSource(PathBuf),
}

impl IndexError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the module root could not be determined.
    pub fn is_configuration(&self) -> bool {
        matches!(self, IndexError::Configuration { .. })
    }

    /// Whether this error comes from loading or parsing sources.
    pub fn is_load(&self) -> bool {
        matches!(
            self,
            IndexError::Syntax { .. }
                | IndexError::Encoding { .. }
                | IndexError::MissingPackage { .. }
                | IndexError::Parser(_)
        )
    }
}
