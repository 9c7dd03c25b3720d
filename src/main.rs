use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use stack_secrets::Args;
use stack_secrets::aws::AwsSecretsManagerStore;
use stack_secrets::catalog::{self, CATALOG};
use stack_secrets::config::{Backend, Settings};
use stack_secrets::i18n::Messages;
use stack_secrets::interactive::Prompt;
use stack_secrets::openbao::OpenBaoClient;
use stack_secrets::provisioner::{self, RunStatus};
use stack_secrets::store::SecretBackend;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("stack-secrets error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    let messages = Messages::new(&args.lang)?;

    let mut settings =
        Settings::new(args.config.clone()).context("Failed to load configuration")?;
    settings.merge_with_args(&args);
    settings.validate()?;
    catalog::validate(CATALOG)?;

    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to initialize async runtime for provisioning")?;
    runtime.block_on(run_provisioner(&args, &settings, &messages))
}

// Logs go to stderr so stdout carries only the operator-facing report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run_provisioner(args: &Args, settings: &Settings, messages: &Messages) -> Result<()> {
    let store = build_store(args, settings, messages).await?;
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let mut prompt = Prompt::new(&mut input, &mut output);

    if args.check {
        provisioner::check(CATALOG, &store, &mut prompt, messages).await?;
        return Ok(());
    }

    match provisioner::run(CATALOG, &store, &mut prompt, messages).await? {
        RunStatus::Aborted => info!("Operator declined; store left untouched"),
        RunStatus::Completed(outcome) => {
            if !outcome.is_deployment_ready() {
                warn!(
                    "{} secret(s) still need a re-run before deployment",
                    outcome.skipped_or_failed.len()
                );
            }
        }
    }
    Ok(())
}

async fn build_store(
    args: &Args,
    settings: &Settings,
    messages: &Messages,
) -> Result<SecretBackend> {
    match settings.backend {
        Backend::Aws => {
            let store = AwsSecretsManagerStore::connect(
                &settings.aws.region,
                settings.aws.endpoint_url.as_deref(),
            )
            .await;
            Ok(SecretBackend::Aws(store))
        }
        Backend::OpenBao => {
            let token = args
                .openbao_token
                .clone()
                .ok_or_else(|| anyhow::anyhow!(messages.error_openbao_token_required()))?;
            let mut client = OpenBaoClient::new(&settings.openbao.url, &settings.openbao.kv_mount)?;
            client.set_token(token);
            if let Some(namespace) = settings.openbao.namespace.clone() {
                client.set_namespace(namespace);
            }
            Ok(SecretBackend::OpenBao(client))
        }
    }
}
