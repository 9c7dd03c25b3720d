use std::io;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::SecretDescriptor;
use crate::i18n::Messages;
use crate::interactive::InteractiveIo;
use crate::report;
use crate::store::{SecretStore, StoreError};

/// A secret created during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSecret {
    pub name: String,
    pub reference_key: String,
    pub identifier: String,
}

/// A secret that still blocks deployment after this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedSecret {
    pub name: String,
    pub reason: UnresolvedReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    RequiredValueMissing,
    CreateFailed(StoreError),
}

/// Per-run classification of every catalog entry. Each name lands in
/// exactly one list, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisioningOutcome {
    pub created: Vec<CreatedSecret>,
    pub skipped_existing: Vec<String>,
    /// Optional secrets the operator left empty; these do not block deployment.
    pub skipped_optional: Vec<String>,
    pub skipped_or_failed: Vec<UnresolvedSecret>,
}

impl ProvisioningOutcome {
    #[must_use]
    pub fn is_deployment_ready(&self) -> bool {
        self.skipped_or_failed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The operator declined at the confirmation gate.
    Aborted,
    Completed(ProvisioningOutcome),
}

/// Existence of each catalog entry, as reported by `check`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub present: Vec<String>,
    pub missing_required: Vec<String>,
    pub missing_optional: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("failed to check whether secret {name} exists")]
    ExistenceCheck {
        name: String,
        #[source]
        source: StoreError,
    },
    #[error("operator interaction failed")]
    Interaction(#[from] io::Error),
}

/// Provisions every missing secret in `catalog`, in order.
///
/// Nothing touches the store until the operator confirms the plan. Secrets
/// that already exist are never prompted for or overwritten, so re-running
/// only acts on what a previous run left unresolved.
///
/// # Errors
///
/// Returns `ProvisionError::ExistenceCheck` when the store cannot answer an
/// existence check (remaining entries are not processed), and
/// `ProvisionError::Interaction` when the terminal fails. Create failures are
/// recorded in the outcome instead.
pub async fn run<S: SecretStore>(
    catalog: &[SecretDescriptor],
    store: &S,
    io: &mut dyn InteractiveIo,
    messages: &Messages,
) -> Result<RunStatus, ProvisionError> {
    io.report(&report::plan_lines(catalog, &store.target(), messages))?;
    if !io.confirm(messages.prompt_confirm_run())? {
        info!("Provisioning cancelled at confirmation");
        io.report(&[messages.run_cancelled().to_string()])?;
        return Ok(RunStatus::Aborted);
    }

    let mut outcome = ProvisioningOutcome::default();
    for descriptor in catalog {
        provision_one(descriptor, store, io, messages, &mut outcome).await?;
    }

    info!(
        created = outcome.created.len(),
        existing = outcome.skipped_existing.len(),
        optional_skipped = outcome.skipped_optional.len(),
        unresolved = outcome.skipped_or_failed.len(),
        "Provisioning finished"
    );
    io.report(&report::summary_lines(&outcome, messages))?;
    Ok(RunStatus::Completed(outcome))
}

async fn provision_one<S: SecretStore>(
    descriptor: &SecretDescriptor,
    store: &S,
    io: &mut dyn InteractiveIo,
    messages: &Messages,
    outcome: &mut ProvisioningOutcome,
) -> Result<(), ProvisionError> {
    let name = descriptor.name;
    if secret_exists(store, name).await? {
        debug!("Secret {name} already exists");
        io.report(&[messages.secret_already_present(name)])?;
        outcome.skipped_existing.push(name.to_string());
        return Ok(());
    }

    let mut lines = vec![messages.secret_header(name, descriptor.description)];
    if let Some(example) = descriptor.example {
        lines.push(messages.secret_example(example));
    }
    io.report(&lines)?;
    let value = io.prompt_value(&messages.prompt_value(name, descriptor.required))?;
    let value = value.trim();
    if value.is_empty() {
        io.report(&[messages.secret_skipped(name, descriptor.required)])?;
        if descriptor.required {
            warn!("No value entered for required secret {name}");
            outcome.skipped_or_failed.push(UnresolvedSecret {
                name: name.to_string(),
                reason: UnresolvedReason::RequiredValueMissing,
            });
        } else {
            outcome.skipped_optional.push(name.to_string());
        }
        return Ok(());
    }

    match store.create(name, value, descriptor.description).await {
        Ok(identifier) => {
            info!("Created secret {name}");
            io.report(&[messages.secret_created(name)])?;
            outcome.created.push(CreatedSecret {
                name: name.to_string(),
                reference_key: descriptor.reference_key.to_string(),
                identifier,
            });
        }
        Err(err) => {
            warn!("Failed to create secret {name}: {err}");
            io.report(&[messages.secret_create_failed(name, &err.to_string())])?;
            outcome.skipped_or_failed.push(UnresolvedSecret {
                name: name.to_string(),
                reason: UnresolvedReason::CreateFailed(err),
            });
        }
    }
    Ok(())
}

/// Reports which catalog entries exist without prompting or writing.
///
/// # Errors
///
/// Same fatal conditions as `run`: a failed existence check or terminal
/// write aborts the check.
pub async fn check<S: SecretStore>(
    catalog: &[SecretDescriptor],
    store: &S,
    io: &mut dyn InteractiveIo,
    messages: &Messages,
) -> Result<CheckReport, ProvisionError> {
    let mut result = CheckReport::default();
    for descriptor in catalog {
        let name = descriptor.name.to_string();
        if secret_exists(store, descriptor.name).await? {
            result.present.push(name);
        } else if descriptor.required {
            result.missing_required.push(name);
        } else {
            result.missing_optional.push(name);
        }
    }
    io.report(&report::check_lines(catalog, &result, &store.target(), messages))?;
    Ok(result)
}

async fn secret_exists<S: SecretStore>(store: &S, name: &str) -> Result<bool, ProvisionError> {
    store
        .exists(name)
        .await
        .map_err(|source| ProvisionError::ExistenceCheck {
            name: name.to_string(),
            source,
        })
}
