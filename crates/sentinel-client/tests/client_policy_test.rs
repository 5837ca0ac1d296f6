//! Integration tests for the fallback façade's read/write policy.

use std::sync::Arc;
use std::time::Duration;

use sentinel_client::{ApiConfig, FixtureConfig, SentinelClient};
use sentinel_core::models::{AuthUser, FiuRequest, ProcessUpload};
use sentinel_core::{DataSource, SentinelError};
use sentinel_session::{MemoryCredentialStore, SessionStore};

/// A base URL nothing listens on: any real network attempt fails fast.
const DEAD_BACKEND: &str = "http://127.0.0.1:1/";

fn client(
    session: Arc<SessionStore<MemoryCredentialStore>>,
) -> SentinelClient<MemoryCredentialStore> {
    let api = ApiConfig {
        base_url: DEAD_BACKEND.into(),
        timeout: Duration::from_millis(500),
    };
    let fixture = FixtureConfig {
        simulate_latency: false,
        seed: Some(7),
    };
    SentinelClient::new(api, fixture, session).unwrap()
}

fn unauthenticated() -> Arc<SessionStore<MemoryCredentialStore>> {
    Arc::new(SessionStore::new(MemoryCredentialStore::new()))
}

fn authenticated() -> Arc<SessionStore<MemoryCredentialStore>> {
    let session = unauthenticated();
    session
        .login(
            "tok-123".into(),
            AuthUser {
                user_id: "u42".into(),
                username: "analyst".into(),
            },
        )
        .unwrap();
    session
}

fn sample_upload() -> ProcessUpload {
    ProcessUpload {
        tenant_id: "1".into(),
        starts_on: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ends_on: chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        schedule: "0 0 0 * * ?".into(),
        product_name: "AML Screening".into(),
        group_name: "Compliance".into(),
        file_name: "data.csv".into(),
        file: b"account,amount\nACC-1,100\n".to_vec(),
    }
}

#[tokio::test]
async fn unauthenticated_reads_serve_fixtures() {
    let client = client(unauthenticated());
    let tenants = client.fetch_tenants().await.unwrap();
    assert_eq!(tenants.len(), 6);
}

#[tokio::test]
async fn authenticated_reads_fall_back_on_network_failure() {
    // The backend is unreachable, so the read path must absorb the
    // failure and serve fixtures instead of erroring.
    let client = client(authenticated());
    let tenants = client.fetch_tenants().await.unwrap();
    assert_eq!(tenants.len(), 6);

    let processes = client.fetch_tenant_processes("1").await.unwrap();
    assert!(processes.iter().all(|p| p.tenant_id == "1"));
}

#[tokio::test]
async fn unauthenticated_create_tenant_fails_pre_flight() {
    let client = client(unauthenticated());
    let err = client
        .create_tenant(FiuRequest {
            tenant_id: "acme".into(),
            password: "secret".into(),
            fiu_id: "FIU-001".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SentinelError::AuthenticationRequired { .. }));
}

#[tokio::test]
async fn unauthenticated_delete_tenant_fails_pre_flight() {
    let client = client(unauthenticated());
    let err = client.delete_tenant("1").await.unwrap_err();
    assert!(matches!(err, SentinelError::AuthenticationRequired { .. }));
}

#[tokio::test]
async fn unauthenticated_upload_fails_pre_flight() {
    let client = client(unauthenticated());
    let err = client.upload_process(sample_upload()).await.unwrap_err();
    assert!(matches!(err, SentinelError::AuthenticationRequired { .. }));
}

#[tokio::test]
async fn authenticated_write_propagates_upstream_failure() {
    // Writes must reach the authoritative store; with the backend down
    // the error surfaces instead of falling back to fixtures.
    let client = client(authenticated());
    let err = client.delete_tenant("1").await.unwrap_err();
    assert!(matches!(err, SentinelError::Upstream(_)));
}

#[tokio::test]
async fn upload_with_malformed_schedule_is_rejected_before_the_network() {
    let client = client(authenticated());
    let mut upload = sample_upload();
    upload.schedule = "* * *".into();
    let err = client.upload_process(upload).await.unwrap_err();
    assert!(matches!(err, SentinelError::Validation { .. }));
}

#[tokio::test]
async fn login_against_dead_backend_is_upstream_not_auth_failure() {
    let client = client(unauthenticated());
    let err = client
        .login(&sentinel_core::models::LoginRequest {
            user_id: "analyst".into(),
            password: "secret".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SentinelError::Upstream(_)));
}

#[tokio::test]
async fn detail_reads_resolve_without_authentication() {
    // A deep link must resolve from path identifiers alone, with no
    // parent-page state and no session.
    let client = client(unauthenticated());
    let detail = client.fetch_run_detail("r3").await.unwrap();
    assert_eq!(detail.id, "r3");
    let trigger = client.fetch_trigger_detail("t1", "u1", "r3").await.unwrap();
    assert_eq!(trigger.id, "t1");
}
