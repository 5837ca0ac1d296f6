//! Integration tests for the fixture-backed data source.

use sentinel_client::{FixtureConfig, FixtureStore};
use sentinel_core::models::RunStatus;
use sentinel_core::{DataSource, SentinelError};

fn store() -> FixtureStore {
    FixtureStore::new(FixtureConfig {
        simulate_latency: false,
        seed: Some(7),
    })
}

#[tokio::test]
async fn tenant_listing_is_deterministic() {
    let store = store();
    let first = store.fetch_tenants().await.unwrap();
    let second = store.fetch_tenants().await.unwrap();
    assert_eq!(first.len(), 6);
    let ids: Vec<_> = first.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(
        second.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        ids
    );
}

#[tokio::test]
async fn tenant_processes_are_scoped_to_the_tenant() {
    let store = store();
    let processes = store.fetch_tenant_processes("2").await.unwrap();
    assert!(!processes.is_empty());
    assert!(processes.iter().all(|p| p.tenant_id == "2"));
}

#[tokio::test]
async fn runs_for_unknown_process_are_empty_not_an_error() {
    let store = store();
    let runs = store.fetch_process_runs("p999").await.unwrap();
    assert!(runs.is_empty());
}

#[tokio::test]
async fn failed_run_detail_ends_with_an_error_log_line() {
    let store = store();
    let detail = store.fetch_run_detail("r3").await.unwrap();

    assert_eq!(detail.status, RunStatus::Failed);
    assert_eq!(detail.process_id, "p1");
    let last = detail.logs.last().unwrap();
    assert_eq!(last, "Process encountered errors");
    assert!(detail
        .logs
        .iter()
        .any(|l| l.contains("8 triggers detected")));
}

#[tokio::test]
async fn successful_run_detail_ends_with_a_success_log_line() {
    let store = store();
    let detail = store.fetch_run_detail("r1").await.unwrap();
    assert_eq!(detail.status, RunStatus::Success);
    assert_eq!(detail.logs.last().unwrap(), "Process completed successfully");
}

#[tokio::test]
async fn run_detail_selects_users_involved_many_users() {
    let store = store();
    let detail = store.fetch_run_detail("r1").await.unwrap();

    // r1 involves 3 users; each carries 2 to 4 triggers whose hit
    // counts sum to the summary count.
    assert_eq!(detail.users.len(), 3);
    for summary in &detail.users {
        assert!((2..=4).contains(&summary.triggers.len()));
        let sum: u32 = summary.triggers.iter().map(|t| t.hit_count).sum();
        assert_eq!(summary.trigger_hit_count, sum);
    }
}

#[tokio::test]
async fn run_detail_for_unknown_run_is_not_found() {
    let store = store();
    let err = store.fetch_run_detail("r999").await.unwrap_err();
    assert!(matches!(err, SentinelError::NotFound { .. }));
}

#[tokio::test]
async fn trigger_detail_resolves_rule_and_transactions() {
    let store = store();
    let detail = store.fetch_trigger_detail("t3", "u1", "r1").await.unwrap();
    assert_eq!(detail.name, "Sanctions List Match");
    assert!(detail.rule_definition.contains("transaction.amount"));
    // Only 3 fixture transactions exist even though t3 reports 3 hits.
    assert!(detail.transactions.len() <= 3);
}

#[tokio::test]
async fn trigger_detail_for_unknown_trigger_is_not_found() {
    let store = store();
    let err = store
        .fetch_trigger_detail("t999", "u1", "r1")
        .await
        .unwrap_err();
    assert!(matches!(err, SentinelError::NotFound { .. }));
}

#[tokio::test]
async fn unknown_tenant_lookup_is_none_not_an_error() {
    let store = store();
    assert!(store.fetch_tenant("999").await.unwrap().is_none());
    assert!(store.fetch_process("p999").await.unwrap().is_none());
}

#[tokio::test]
async fn known_lookups_resolve() {
    let store = store();
    let tenant = store.fetch_tenant("4").await.unwrap().unwrap();
    assert_eq!(tenant.name, "Middle East Banking Corp");
    let process = store.fetch_process("p5").await.unwrap().unwrap();
    assert_eq!(process.name, "Risk Assessment");
}
