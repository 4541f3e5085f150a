use std::io;
use std::path::PathBuf;

use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    /// Bad arguments, or a `--help`/`--version` request the caller should print.
    #[error("{0}")]
    Usage(clap::Error),
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed entry on line {line_no}: {line:?}")]
    Parse { line_no: usize, line: String },
    #[error("Cannot create database {}: {reason}", path.display())]
    StoreInit { path: PathBuf, reason: String },
    #[error("Cannot write entries to {}: {source}", path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: DieselError,
    },
    #[error("Cannot index {}: {source}", path.display())]
    StoreIndex {
        path: PathBuf,
        #[source]
        source: DieselError,
    },
}

impl ImportError {
    pub fn store_init(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ImportError::StoreInit {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
