use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
pub enum Backend {
    #[serde(rename = "aws")]
    #[value(name = "aws")]
    Aws,
    #[serde(rename = "openbao")]
    #[value(name = "openbao")]
    OpenBao,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub backend: Backend,
    pub aws: AwsSettings,
    pub openbao: OpenBaoSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AwsSettings {
    pub region: String,
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenBaoSettings {
    pub url: String,
    pub kv_mount: String,
    pub namespace: Option<String>,
}

pub const DEFAULT_CONFIG_FILE: &str = "stack-secrets.toml";
const DEFAULT_BACKEND: &str = "aws";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_OPENBAO_URL: &str = "http://localhost:8200";
const DEFAULT_KV_MOUNT: &str = "secret";
const ENV_PREFIX: &str = "STACK_SECRETS";

impl Settings {
    /// Loads settings from defaults, an optional TOML file and
    /// `STACK_SECRETS_*` environment variables, in that order.
    ///
    /// # Errors
    /// Returns error if the file or an environment value cannot be parsed.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load(config_path, environment())
    }

    fn load(config_path: Option<PathBuf>, environment: Environment) -> Result<Self, ConfigError> {
        let path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Config::builder()
            .set_default("backend", DEFAULT_BACKEND)?
            .set_default("aws.region", DEFAULT_REGION)?
            .set_default("openbao.url", DEFAULT_OPENBAO_URL)?
            .set_default("openbao.kv_mount", DEFAULT_KV_MOUNT)?
            .add_source(File::from(path).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Merges CLI arguments into the settings, overriding values if present.
    pub fn merge_with_args(&mut self, args: &crate::Args) {
        if let Some(backend) = args.backend {
            self.backend = backend;
        }
        if let Some(region) = &args.region {
            region.clone_into(&mut self.aws.region);
        }
        if let Some(endpoint_url) = &args.endpoint_url {
            self.aws.endpoint_url = Some(endpoint_url.clone());
        }
        if let Some(url) = &args.openbao_url {
            url.clone_into(&mut self.openbao.url);
        }
        if let Some(kv_mount) = &args.kv_mount {
            kv_mount.clone_into(&mut self.openbao.kv_mount);
        }
        if let Some(namespace) = &args.openbao_namespace {
            self.openbao.namespace = Some(namespace.clone());
        }
    }

    /// Validates the settings needed by the selected backend.
    ///
    /// # Errors
    /// Returns error if a required value is blank.
    pub fn validate(&self) -> Result<()> {
        match self.backend {
            Backend::Aws => {
                if self.aws.region.trim().is_empty() {
                    anyhow::bail!("aws.region must not be empty");
                }
            }
            Backend::OpenBao => {
                if self.openbao.url.trim().is_empty() {
                    anyhow::bail!("openbao.url must not be empty");
                }
                if self.openbao.kv_mount.trim_matches('/').is_empty() {
                    anyhow::bail!("openbao.kv_mount must not be empty");
                }
            }
        }
        Ok(())
    }
}

// e.g. STACK_SECRETS_BACKEND, STACK_SECRETS_OPENBAO__KV_MOUNT
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
