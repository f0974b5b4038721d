//! # lumohub-adapter-credentials-file
//!
//! Stores the credentials issued by the gateway in a small JSON file
//! (`{"identity": "...", "psk": "..."}`) so the security code is only
//! exchanged once.
//!
//! ## Dependency rule
//! Depends on `lumohub-app` (for the `CredentialStore` port) and
//! `lumohub-domain` (for `Credentials`). The `app` and `domain` crates must
//! never reference this adapter.

mod error;

use std::path::{Path, PathBuf};

use lumohub_app::ports::CredentialStore;
use lumohub_app::ports::credentials::CredentialStoreError;
use lumohub_domain::credentials::Credentials;

pub use error::FileStoreError;

/// [`CredentialStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCredentialStore {
    path: PathBuf,
}

impl JsonFileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Option<Credentials>, FileStoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(FileStoreError::Io(err)),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn write(&self, credentials: &Credentials) -> Result<(), FileStoreError> {
        let json = serde_json::to_vec_pretty(credentials)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(path = %self.path.display(), "wrote gateway credentials");
        Ok(())
    }
}

impl CredentialStore for JsonFileCredentialStore {
    async fn load(&self) -> Result<Option<Credentials>, CredentialStoreError> {
        Ok(self.read().await?)
    }

    async fn save(&self, credentials: &Credentials) -> Result<(), CredentialStoreError> {
        Ok(self.write(credentials).await?)
    }
}
