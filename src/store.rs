use std::future::Future;

use thiserror::Error;

use crate::aws::AwsSecretsManagerStore;
use crate::openbao::OpenBaoClient;

/// Failure reported by a secret store backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("secret store unavailable: {0}")]
    Unavailable(String),
    #[error("permission denied by secret store: {0}")]
    PermissionDenied(String),
    #[error("secret store rejected the value: {0}")]
    InvalidValue(String),
}

/// The narrow capability the provisioner needs from a secret store.
///
/// `exists` must answer `Ok(false)` for "not found" and reserve errors for
/// connectivity or credential problems.
pub trait SecretStore {
    fn exists(&self, name: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Creates a new secret and returns the store's identifier for it.
    fn create(
        &self,
        name: &str,
        value: &str,
        description: &str,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Human-readable description of where secrets are written.
    fn target(&self) -> String;
}

/// Backend selected at startup.
pub enum SecretBackend {
    Aws(AwsSecretsManagerStore),
    OpenBao(OpenBaoClient),
}

impl SecretStore for SecretBackend {
    async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        match self {
            Self::Aws(store) => store.exists(name).await,
            Self::OpenBao(client) => client.exists(name).await,
        }
    }

    async fn create(
        &self,
        name: &str,
        value: &str,
        description: &str,
    ) -> Result<String, StoreError> {
        match self {
            Self::Aws(store) => store.create(name, value, description).await,
            Self::OpenBao(client) => client.create(name, value, description).await,
        }
    }

    fn target(&self) -> String {
        match self {
            Self::Aws(store) => store.target(),
            Self::OpenBao(client) => client.target(),
        }
    }
}
