//! Credential file error type.

/// Errors originating from the JSON credential file.
#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    /// Reading or writing the file failed.
    #[error("credential file I/O error")]
    Io(#[from] std::io::Error),

    /// The file does not contain valid credentials.
    #[error("malformed credential file")]
    Json(#[from] serde_json::Error),
}
