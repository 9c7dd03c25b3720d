use super::Strings;

pub(super) static STRINGS: Strings = Strings {
    plan_title: "stack-secrets: provisioning plan",
    plan_target: "- target: {value}",
    plan_entry_required: "  - {name} (required)",
    plan_entry_optional: "  - {name} (optional)",
    prompt_confirm_run: "Create any of these secrets that are missing? [y/N]: ",
    run_cancelled: "Cancelled; no secrets were changed.",
    secret_already_present: "- {name}: already present, skipping",
    secret_header: "{name}: {description}",
    secret_example: "  example: {example}",
    prompt_value_required: "Value for {name} (required, empty to skip): ",
    prompt_value_optional: "Value for {name} (optional, empty to skip): ",
    secret_created: "- {name}: created",
    secret_skipped_required: "- {name}: no value entered (required)",
    secret_skipped_optional: "- {name}: no value entered, skipping",
    secret_create_failed: "- {name}: create failed: {error}",
    summary_title: "stack-secrets: summary",
    summary_created: "- created: {count}",
    summary_existing: "- already present: {count}",
    summary_optional_skipped: "- optional, skipped: {count}",
    summary_needs_rerun: "- needs re-run: {count}",
    summary_config_title: "Add these identifiers to the stack configuration:",
    summary_blocking_title: "Still blocking deployment:",
    summary_reason_missing: "  - {name}: required but no value was entered",
    summary_reason_failed: "  - {name}: create failed: {error}",
    summary_rerun_hint: "Re-run stack-secrets after fixing the items above; secrets already present are skipped.",
    summary_ready: "All required secrets are present; the stack is ready to deploy.",
    check_title: "stack-secrets check: summary",
    check_present: "- {name}: present",
    check_missing_required: "- {name}: missing (required)",
    check_missing_optional: "- {name}: missing (optional)",
    check_ready: "All required secrets are present.",
    check_not_ready: "Required secrets missing: {count}. Run stack-secrets to create them.",
    error_openbao_token_required: "OpenBao token is required: pass --openbao-token or set OPENBAO_TOKEN",
};
