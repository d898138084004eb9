use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the contact store.
///
/// Reads never report "no rows" as an error: an empty result is `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not initialize database at {path}")]
    Initialization {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("could not create database directory {path}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{op} failed")]
    Storage {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("contact store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn storage(op: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Storage { op, source }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
