use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing a collection file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a JSON array of records
    #[error("malformed store file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode records for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store worker stopped: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
