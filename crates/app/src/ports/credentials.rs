//! Credential store port — persistence for gateway credentials.

use std::error::Error;
use std::future::Future;

use lumohub_domain::credentials::Credentials;

/// Boxed error returned by credential stores.
pub type CredentialStoreError = Box<dyn Error + Send + Sync>;

/// Loads and saves the credentials obtained from the gateway.
pub trait CredentialStore {
    /// Load previously saved credentials. `Ok(None)` when nothing is stored.
    fn load(&self) -> impl Future<Output = Result<Option<Credentials>, CredentialStoreError>> + Send;

    /// Persist freshly issued credentials.
    fn save(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), CredentialStoreError>> + Send;
}
