use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading a corpus or writing the postings report.
///
/// Ranking never fails: unknown terms and zero-norm vectors are scored as 0.
#[derive(Debug, Error)]
pub enum SearchEngineError {
    #[error("cannot read corpus directory {path:?}: {source}")]
    CorpusDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read document {path:?}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot derive a document id from {path:?}")]
    InvalidDocumentName { path: PathBuf },

    #[error("cannot write postings report to {path:?}: {source}")]
    PostingsWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
