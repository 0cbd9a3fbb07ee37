// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("I/O error: {} (path: {})", .source, .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("failed to load the Python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("{}: source is not parseable Python", .path.display())]
    Parse { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CheckError>;

// Allow `?` on std::io::Error by converting to CheckError::Io with unknown path.
impl From<std::io::Error> for CheckError {
    fn from(source: std::io::Error) -> Self {
        CheckError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
