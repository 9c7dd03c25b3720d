use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::{SecretStore, StoreError};

const VAULT_TOKEN_HEADER: &str = "X-Vault-Token";
const VAULT_NAMESPACE_HEADER: &str = "X-Vault-Namespace";

/// KV v2 client used as a secret store backend.
#[derive(Debug, Clone)]
pub struct OpenBaoClient {
    base_url: String,
    kv_mount: String,
    client: Client,
    token: Option<String>,
    namespace: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WriteResponse {
    data: WriteData,
}

#[derive(Debug, Deserialize)]
struct WriteData {
    version: u64,
}

impl OpenBaoClient {
    /// Creates a client for the KV v2 engine mounted at `kv_mount`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, kv_mount: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build OpenBao HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            kv_mount: kv_mount.trim_matches('/').to_string(),
            client,
            token: None,
            namespace: None,
        })
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn set_namespace(&mut self, namespace: String) {
        self.namespace = Some(namespace);
    }

    /// Path a consumer reads the secret from.
    #[must_use]
    pub fn secret_path(&self, name: &str) -> String {
        format!("{}/data/{name}", self.kv_mount)
    }

    /// Reports whether `name` has metadata under the KV mount.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for 401/403 and `Unavailable` for transport
    /// failures or any other unexpected status.
    pub async fn secret_exists(&self, name: &str) -> Result<bool, StoreError> {
        let path = format!("{}/metadata/{name}", self.kv_mount);
        let response = self.send(self.client.get(self.endpoint(&path))).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if status.is_success() {
            return Ok(true);
        }
        let text = read_body(response).await;
        Err(classify_status(status, &text))
    }

    /// Writes the first version of `name` and records its description.
    ///
    /// The write uses check-and-set 0, so an existing secret is never
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` when the server rejects the write (including a
    /// check-and-set conflict), `PermissionDenied` for 401/403 and
    /// `Unavailable` otherwise.
    pub async fn create_secret(
        &self,
        name: &str,
        value: &str,
        description: &str,
    ) -> Result<String, StoreError> {
        #[derive(Serialize)]
        struct WriteRequest<'a> {
            options: WriteOptions,
            data: SecretData<'a>,
        }
        #[derive(Serialize)]
        struct WriteOptions {
            cas: u64,
        }
        #[derive(Serialize)]
        struct SecretData<'a> {
            value: &'a str,
        }
        let secret_path = self.secret_path(name);
        let request = self
            .client
            .post(self.endpoint(&secret_path))
            .json(&WriteRequest {
                options: WriteOptions { cas: 0 },
                data: SecretData { value },
            });
        let response = self.send(request).await?;
        let status = response.status();
        let text = read_body(response).await;
        if !status.is_success() {
            return Err(classify_status(status, &text));
        }
        match serde_json::from_str::<WriteResponse>(&text) {
            Ok(parsed) => debug!("Wrote {secret_path} version {}", parsed.data.version),
            Err(_) => debug!("Wrote {secret_path}"),
        }

        if let Err(err) = self.write_description(name, description).await {
            warn!("Secret {name} was created but its description was not stored: {err}");
        }
        Ok(secret_path)
    }

    async fn write_description(&self, name: &str, description: &str) -> Result<(), StoreError> {
        let path = format!("{}/metadata/{name}", self.kv_mount);
        let body = serde_json::json!({ "custom_metadata": { "description": description } });
        let response = self
            .send(self.client.post(self.endpoint(&path)).json(&body))
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = read_body(response).await;
        Err(classify_status(status, &text))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.base_url)
    }

    async fn send(&self, mut request: RequestBuilder) -> Result<Response, StoreError> {
        let token = self
            .token
            .as_ref()
            .ok_or_else(|| StoreError::PermissionDenied("OpenBao token is not set".to_string()))?;
        request = request.header(VAULT_TOKEN_HEADER, token);
        if let Some(namespace) = &self.namespace {
            request = request.header(VAULT_NAMESPACE_HEADER, namespace);
        }
        request
            .send()
            .await
            .map_err(|err| StoreError::Unavailable(format!("OpenBao request failed: {err}")))
    }
}

impl SecretStore for OpenBaoClient {
    async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        self.secret_exists(name).await
    }

    async fn create(
        &self,
        name: &str,
        value: &str,
        description: &str,
    ) -> Result<String, StoreError> {
        self.create_secret(name, value, description).await
    }

    fn target(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!(
                "OpenBao KV v2 at {} (mount {}, namespace {namespace})",
                self.base_url, self.kv_mount
            ),
            None => format!(
                "OpenBao KV v2 at {} (mount {})",
                self.base_url, self.kv_mount
            ),
        }
    }
}

async fn read_body(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

fn classify_status(status: StatusCode, text: &str) -> StoreError {
    let detail = format!("OpenBao API error ({status}): {}", text.trim());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::PermissionDenied(detail),
        StatusCode::BAD_REQUEST => StoreError::InvalidValue(detail),
        _ => StoreError::Unavailable(detail),
    }
}
