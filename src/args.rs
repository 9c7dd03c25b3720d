use std::path::PathBuf;

use clap::Parser;

use crate::config::Backend;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (default: stack-secrets.toml)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Language for output (en or ko)
    #[arg(long, env = "STACK_SECRETS_LANG", default_value = "en")]
    pub lang: String,

    /// Secret store backend (default: aws)
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// AWS region holding the secrets (default: us-east-1)
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS Secrets Manager endpoint override, e.g. a local emulator
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// `OpenBao` API URL
    #[arg(long)]
    pub openbao_url: Option<String>,

    /// `OpenBao` KV mount path (KV v2)
    #[arg(long)]
    pub kv_mount: Option<String>,

    /// `OpenBao` namespace (optional)
    #[arg(long)]
    pub openbao_namespace: Option<String>,

    /// `OpenBao` token
    #[arg(long, env = "OPENBAO_TOKEN", hide_env_values = true)]
    pub openbao_token: Option<String>,

    /// Only report which secrets exist; never prompt or write
    #[arg(long)]
    pub check: bool,
}
