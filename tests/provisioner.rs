mod support;

use stack_secrets::catalog::SecretDescriptor;
use stack_secrets::i18n::Messages;
use stack_secrets::provisioner::{
    self, CreatedSecret, ProvisionError, ProvisioningOutcome, RunStatus, UnresolvedReason,
    UnresolvedSecret,
};
use stack_secrets::store::StoreError;
use support::{MemoryStore, ScriptedIo, descriptor};

const CATALOG: &[SecretDescriptor] = &[
    descriptor("webapp/token", true),
    descriptor("webapp/session", true),
    descriptor("webapp/analytics", false),
];

fn messages() -> Messages {
    Messages::new("en").expect("english messages")
}

async fn run_completed(
    catalog: &[SecretDescriptor],
    store: &MemoryStore,
    io: &mut ScriptedIo,
) -> ProvisioningOutcome {
    match provisioner::run(catalog, store, io, &messages())
        .await
        .expect("run should succeed")
    {
        RunStatus::Completed(outcome) => outcome,
        RunStatus::Aborted => panic!("expected a completed run"),
    }
}

#[tokio::test]
async fn existing_secrets_are_skipped_without_prompting_or_creating() {
    let store = MemoryStore::with_secrets(&["webapp/token", "webapp/session", "webapp/analytics"]);
    let mut io = ScriptedIo::new(true, &[]);

    let outcome = run_completed(CATALOG, &store, &mut io).await;

    assert!(outcome.created.is_empty());
    assert_eq!(
        outcome.skipped_existing,
        vec!["webapp/token", "webapp/session", "webapp/analytics"]
    );
    assert!(outcome.skipped_or_failed.is_empty());
    assert!(store.create_calls().is_empty());
    assert!(io.value_prompts.is_empty());
    assert_eq!(store.value("webapp/token").as_deref(), Some("existing"));
}

#[tokio::test]
async fn declining_confirmation_touches_nothing() {
    let store = MemoryStore::default();
    let mut io = ScriptedIo::new(false, &["v1", "v2", "v3"]);

    let status = provisioner::run(CATALOG, &store, &mut io, &messages())
        .await
        .expect("abort is not an error");

    assert_eq!(status, RunStatus::Aborted);
    assert_eq!(io.confirm_prompts.len(), 1);
    assert!(store.exists_calls().is_empty());
    assert!(store.create_calls().is_empty());
    assert!(io.value_prompts.is_empty());
    assert!(io.output().contains("Cancelled; no secrets were changed."));
}

#[tokio::test]
async fn plan_is_reported_before_confirmation() {
    let store = MemoryStore::default();
    let mut io = ScriptedIo::new(false, &[]);

    provisioner::run(CATALOG, &store, &mut io, &messages())
        .await
        .expect("abort is not an error");

    assert_eq!(io.lines[0], "stack-secrets: provisioning plan");
    assert_eq!(io.lines[1], "- target: memory");
    assert_eq!(io.lines[2], "  - webapp/token (required)");
    assert_eq!(io.lines[4], "  - webapp/analytics (optional)");
}

#[tokio::test]
async fn empty_value_for_required_secret_is_unresolved() {
    let store = MemoryStore::default();
    let mut io = ScriptedIo::new(true, &["", "   ", ""]);

    let outcome = run_completed(CATALOG, &store, &mut io).await;

    assert!(outcome.created.is_empty());
    assert!(outcome.skipped_existing.is_empty());
    assert_eq!(
        outcome.skipped_or_failed,
        vec![
            UnresolvedSecret {
                name: "webapp/token".to_string(),
                reason: UnresolvedReason::RequiredValueMissing,
            },
            UnresolvedSecret {
                name: "webapp/session".to_string(),
                reason: UnresolvedReason::RequiredValueMissing,
            },
        ]
    );
    assert_eq!(outcome.skipped_optional, vec!["webapp/analytics"]);
    assert!(store.create_calls().is_empty());
    assert!(!outcome.is_deployment_ready());
}

#[tokio::test]
async fn create_failure_does_not_stop_later_secrets() {
    let store = MemoryStore::default();
    store.fail_create(
        "webapp/token",
        StoreError::Unavailable("connection reset".to_string()),
    );
    let mut io = ScriptedIo::new(true, &["t1", "s1", "a1"]);

    let outcome = run_completed(CATALOG, &store, &mut io).await;

    assert_eq!(
        store.create_calls(),
        vec!["webapp/token", "webapp/session", "webapp/analytics"]
    );
    assert_eq!(outcome.created.len(), 2);
    assert_eq!(outcome.skipped_or_failed.len(), 1);
    assert_eq!(outcome.skipped_or_failed[0].name, "webapp/token");
    assert!(matches!(
        outcome.skipped_or_failed[0].reason,
        UnresolvedReason::CreateFailed(StoreError::Unavailable(_))
    ));
}

#[tokio::test]
async fn rerun_after_partial_failure_only_creates_unresolved_secrets() {
    let store = MemoryStore::default();
    store.fail_create(
        "webapp/session",
        StoreError::PermissionDenied("not allowed".to_string()),
    );
    let mut first = ScriptedIo::new(true, &["t1", "s1", ""]);
    let first_outcome = run_completed(CATALOG, &store, &mut first).await;
    assert_eq!(first_outcome.created.len(), 1);
    assert_eq!(first_outcome.skipped_or_failed.len(), 1);

    store.clear_failures();
    store.reset_calls();
    let mut second = ScriptedIo::new(true, &["s2", ""]);
    let second_outcome = run_completed(CATALOG, &store, &mut second).await;

    assert_eq!(store.create_calls(), vec!["webapp/session"]);
    assert_eq!(second_outcome.skipped_existing, vec!["webapp/token"]);
    assert_eq!(second_outcome.skipped_optional, vec!["webapp/analytics"]);
    assert_eq!(store.value("webapp/token").as_deref(), Some("t1"));
    assert_eq!(store.value("webapp/session").as_deref(), Some("s2"));
    assert!(second_outcome.is_deployment_ready());
}

#[tokio::test]
async fn second_run_after_full_success_makes_no_creates() {
    let store = MemoryStore::default();
    let mut first = ScriptedIo::new(true, &["t1", "s1", "a1"]);
    let first_outcome = run_completed(CATALOG, &store, &mut first).await;
    assert_eq!(first_outcome.created.len(), 3);

    store.reset_calls();
    let mut second = ScriptedIo::new(true, &[]);
    let second_outcome = run_completed(CATALOG, &store, &mut second).await;

    assert!(store.create_calls().is_empty());
    assert_eq!(second_outcome.skipped_existing.len(), 3);
    assert!(second.value_prompts.is_empty());
}

#[tokio::test]
async fn existence_check_failure_is_fatal() {
    let store = MemoryStore::default();
    store.fail_exists(
        "webapp/session",
        StoreError::PermissionDenied("expired credentials".to_string()),
    );
    let mut io = ScriptedIo::new(true, &["t1", "s1", "a1"]);

    let err = provisioner::run(CATALOG, &store, &mut io, &messages())
        .await
        .expect_err("existence check failure should abort the run");

    match err {
        ProvisionError::ExistenceCheck { name, source } => {
            assert_eq!(name, "webapp/session");
            assert!(matches!(source, StoreError::PermissionDenied(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.exists_calls(), vec!["webapp/token", "webapp/session"]);
    assert_eq!(store.create_calls(), vec!["webapp/token"]);
}

#[tokio::test]
async fn existing_required_and_empty_optional_is_not_blocking() {
    let catalog = [descriptor("a", true), descriptor("b", false)];
    let store = MemoryStore::with_secrets(&["a"]);
    let mut io = ScriptedIo::new(true, &[""]);

    let outcome = run_completed(&catalog, &store, &mut io).await;

    assert_eq!(outcome.skipped_existing, vec!["a"]);
    assert!(outcome.skipped_or_failed.is_empty());
    assert!(outcome.created.is_empty());
    assert_eq!(outcome.skipped_optional, vec!["b"]);
    assert!(outcome.is_deployment_ready());
}

#[tokio::test]
async fn created_secret_reports_store_identifier() {
    let catalog = [descriptor("x", true)];
    let store = MemoryStore::default();
    store.set_identifier("x", "arn:1");
    let mut io = ScriptedIo::new(true, &["v1"]);

    let outcome = run_completed(&catalog, &store, &mut io).await;

    assert_eq!(
        outcome.created,
        vec![CreatedSecret {
            name: "x".to_string(),
            reference_key: "x".to_string(),
            identifier: "arn:1".to_string(),
        }]
    );
    assert_eq!(store.value("x").as_deref(), Some("v1"));
    assert!(io.lines.contains(&"[secrets]".to_string()));
    assert!(io.lines.contains(&"x = \"arn:1\"".to_string()));
}

#[tokio::test]
async fn rejected_value_is_listed_for_rerun() {
    let catalog = [descriptor("y", true)];
    let store = MemoryStore::default();
    store.fail_create("y", StoreError::InvalidValue("value too large".to_string()));
    let mut io = ScriptedIo::new(true, &["v1"]);

    let outcome = run_completed(&catalog, &store, &mut io).await;

    assert!(outcome.created.is_empty());
    assert_eq!(outcome.skipped_or_failed.len(), 1);
    assert_eq!(outcome.skipped_or_failed[0].name, "y");
    let output = io.output();
    assert!(output.contains("Still blocking deployment:"));
    assert!(output.contains("  - y: create failed: secret store rejected the value: value too large"));
    assert!(output.contains("Re-run stack-secrets"));
    assert!(!output.contains("[secrets]"));
}

#[tokio::test]
async fn prompt_shows_description_and_example() {
    let catalog = [SecretDescriptor {
        name: "webapp/db",
        description: "Connection string for the application database",
        reference_key: "DATABASE_URL",
        required: true,
        example: Some("postgres://app@db:5432/app"),
    }];
    let store = MemoryStore::default();
    let mut io = ScriptedIo::new(true, &["  postgres://real  "]);

    let outcome = run_completed(&catalog, &store, &mut io).await;

    assert!(
        io.lines
            .contains(&"webapp/db: Connection string for the application database".to_string())
    );
    assert!(io.lines.contains(&"  example: postgres://app@db:5432/app".to_string()));
    assert_eq!(
        io.value_prompts,
        vec!["Value for webapp/db (required, empty to skip): "]
    );
    assert_eq!(store.value("webapp/db").as_deref(), Some("postgres://real"));
    assert_eq!(outcome.created[0].reference_key, "DATABASE_URL");
}

#[tokio::test]
async fn config_block_follows_catalog_order() {
    let store = MemoryStore::default();
    let mut io = ScriptedIo::new(true, &["t1", "s1", "a1"]);

    run_completed(CATALOG, &store, &mut io).await;

    let start = io
        .lines
        .iter()
        .position(|line| line == "[secrets]")
        .expect("config block");
    assert_eq!(
        &io.lines[start + 1..start + 4],
        &[
            "webapp/token = \"memory:webapp/token\"".to_string(),
            "webapp/session = \"memory:webapp/session\"".to_string(),
            "webapp/analytics = \"memory:webapp/analytics\"".to_string(),
        ]
    );
}

#[tokio::test]
async fn check_reports_presence_without_writing() {
    let store = MemoryStore::with_secrets(&["webapp/token"]);
    let mut io = ScriptedIo::new(false, &[]);

    let report = provisioner::check(CATALOG, &store, &mut io, &messages())
        .await
        .expect("check should succeed");

    assert_eq!(report.present, vec!["webapp/token"]);
    assert_eq!(report.missing_required, vec!["webapp/session"]);
    assert_eq!(report.missing_optional, vec!["webapp/analytics"]);
    assert!(store.create_calls().is_empty());
    assert!(io.confirm_prompts.is_empty());
    assert!(io.value_prompts.is_empty());
    assert!(io.output().contains("- webapp/session: missing (required)"));
    assert!(io.output().contains("Required secrets missing: 1."));
}

#[tokio::test]
async fn check_propagates_store_errors() {
    let store = MemoryStore::default();
    store.fail_exists(
        "webapp/token",
        StoreError::Unavailable("dns failure".to_string()),
    );
    let mut io = ScriptedIo::new(false, &[]);

    let err = provisioner::check(CATALOG, &store, &mut io, &messages())
        .await
        .expect_err("check should fail");

    assert!(err.to_string().contains("webapp/token"));
}
