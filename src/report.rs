use crate::catalog::SecretDescriptor;
use crate::i18n::Messages;
use crate::provisioner::{CheckReport, CreatedSecret, ProvisioningOutcome, UnresolvedReason};

pub const CONFIG_SECTION: &str = "[secrets]";

pub(crate) fn plan_lines(
    catalog: &[SecretDescriptor],
    target: &str,
    messages: &Messages,
) -> Vec<String> {
    let mut lines = vec![
        messages.plan_title().to_string(),
        messages.plan_target(target),
    ];
    lines.extend(
        catalog
            .iter()
            .map(|descriptor| messages.plan_entry(descriptor.name, descriptor.required)),
    );
    lines
}

pub(crate) fn summary_lines(outcome: &ProvisioningOutcome, messages: &Messages) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        messages.summary_title().to_string(),
        messages.summary_created(outcome.created.len()),
        messages.summary_existing(outcome.skipped_existing.len()),
        messages.summary_optional_skipped(outcome.skipped_optional.len()),
        messages.summary_needs_rerun(outcome.skipped_or_failed.len()),
    ];

    if !outcome.created.is_empty() {
        lines.push(String::new());
        lines.push(messages.summary_config_title().to_string());
        lines.extend(config_block(&outcome.created));
    }

    lines.push(String::new());
    if outcome.is_deployment_ready() {
        lines.push(messages.summary_ready().to_string());
    } else {
        lines.push(messages.summary_blocking_title().to_string());
        for unresolved in &outcome.skipped_or_failed {
            lines.push(match &unresolved.reason {
                UnresolvedReason::RequiredValueMissing => {
                    messages.summary_reason_missing(&unresolved.name)
                }
                UnresolvedReason::CreateFailed(err) => {
                    messages.summary_reason_failed(&unresolved.name, &err.to_string())
                }
            });
        }
        lines.push(messages.summary_rerun_hint().to_string());
    }
    lines
}

/// Renders created secrets as a TOML table mapping reference keys to store
/// identifiers, ready to paste into the stack configuration.
#[must_use]
pub fn config_block(created: &[CreatedSecret]) -> Vec<String> {
    let mut lines = vec![CONFIG_SECTION.to_string()];
    lines.extend(created.iter().map(|secret| {
        format!(
            "{} = \"{}\"",
            secret.reference_key,
            escape_toml_string(&secret.identifier)
        )
    }));
    lines
}

pub(crate) fn check_lines(
    catalog: &[SecretDescriptor],
    report: &CheckReport,
    target: &str,
    messages: &Messages,
) -> Vec<String> {
    let mut lines = vec![
        messages.check_title().to_string(),
        messages.plan_target(target),
    ];
    for descriptor in catalog {
        let name = descriptor.name;
        if report.present.iter().any(|present| present == name) {
            lines.push(messages.check_present(name));
        } else {
            lines.push(messages.check_missing(name, descriptor.required));
        }
    }
    if report.missing_required.is_empty() {
        lines.push(messages.check_ready().to_string());
    } else {
        lines.push(messages.check_not_ready(report.missing_required.len()));
    }
    lines
}

fn escape_toml_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
