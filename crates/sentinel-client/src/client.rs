//! The data-access façade used by every page.
//!
//! Read policy: when the session is authenticated and the backend
//! exposes the endpoint, try the network first; any failure is logged
//! and absorbed by falling back to fixtures, so reads never surface
//! upstream errors. Endpoints the backend does not expose yet (run
//! history, run/trigger detail, by-id lookups, the cross-tenant
//! process listing) resolve from fixtures directly.
//!
//! Write policy: writes require authentication, fail pre-flight with
//! [`SentinelError::AuthenticationRequired`] before any network call,
//! and propagate upstream failures to the caller. There is no fixture
//! fallback for writes and no partial mutation on failure.

use std::sync::Arc;

use sentinel_core::error::{SentinelError, SentinelResult};
use sentinel_core::models::{
    FiuRequest, LoginRequest, LoginResponse, Process, ProcessRun, ProcessRunDetail, ProcessUpload,
    Tenant, TriggerDetail,
};
use sentinel_core::DataSource;
use sentinel_session::{CredentialStore, SessionStore};
use tracing::{error, warn};

use crate::config::{ApiConfig, FixtureConfig};
use crate::error::ApiError;
use crate::fixtures::FixtureStore;
use crate::remote::RemoteApi;

pub struct SentinelClient<S: CredentialStore> {
    remote: RemoteApi<S>,
    fixtures: FixtureStore,
    session: Arc<SessionStore<S>>,
}

impl<S: CredentialStore> SentinelClient<S> {
    pub fn new(
        api: ApiConfig,
        fixture: FixtureConfig,
        session: Arc<SessionStore<S>>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            remote: RemoteApi::new(api, Arc::clone(&session))?,
            fixtures: FixtureStore::new(fixture),
            session,
        })
    }

    /// Authenticate. The caller decides what to do with the returned
    /// token (normally: hand it to the session store).
    pub async fn login(&self, request: &LoginRequest) -> SentinelResult<LoginResponse> {
        self.remote.login(request).await
    }

    /// Pre-flight gate for mutating operations.
    fn require_auth(&self, operation: &str) -> SentinelResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(SentinelError::AuthenticationRequired {
                operation: operation.into(),
            })
        }
    }
}

impl<S: CredentialStore> DataSource for SentinelClient<S> {
    async fn fetch_tenants(&self) -> SentinelResult<Vec<Tenant>> {
        if self.session.is_authenticated() {
            match self.remote.fetch_tenants().await {
                Ok(tenants) => return Ok(tenants),
                Err(e) => warn!(error = %e, "tenant list fetch failed, using fixtures"),
            }
        }
        self.fixtures.fetch_tenants().await
    }

    async fn create_tenant(&self, input: FiuRequest) -> SentinelResult<Tenant> {
        self.require_auth("creating tenants")?;
        self.remote.create_tenant(&input).await.map_err(|e| {
            error!(tenant_id = %input.tenant_id, error = %e, "tenant creation failed");
            SentinelError::from(e)
        })
    }

    async fn delete_tenant(&self, tenant_id: &str) -> SentinelResult<()> {
        self.require_auth("deleting tenants")?;
        self.remote.delete_tenant(tenant_id).await.map_err(|e| {
            error!(tenant_id, error = %e, "tenant deletion failed");
            SentinelError::from(e)
        })
    }

    async fn fetch_all_processes(&self) -> SentinelResult<Vec<Process>> {
        // No cross-tenant process endpoint exists yet.
        self.fixtures.fetch_all_processes().await
    }

    async fn fetch_tenant_processes(&self, tenant_id: &str) -> SentinelResult<Vec<Process>> {
        if self.session.is_authenticated() {
            match self.remote.fetch_tenant_processes(tenant_id).await {
                Ok(processes) => return Ok(processes),
                Err(e) => {
                    warn!(tenant_id, error = %e, "tenant process fetch failed, using fixtures")
                }
            }
        }
        self.fixtures.fetch_tenant_processes(tenant_id).await
    }

    async fn fetch_process_runs(&self, process_id: &str) -> SentinelResult<Vec<ProcessRun>> {
        self.fixtures.fetch_process_runs(process_id).await
    }

    async fn fetch_run_detail(&self, run_id: &str) -> SentinelResult<ProcessRunDetail> {
        self.fixtures.fetch_run_detail(run_id).await
    }

    async fn fetch_trigger_detail(
        &self,
        trigger_id: &str,
        user_id: &str,
        session_id: &str,
    ) -> SentinelResult<TriggerDetail> {
        self.fixtures
            .fetch_trigger_detail(trigger_id, user_id, session_id)
            .await
    }

    async fn fetch_tenant(&self, tenant_id: &str) -> SentinelResult<Option<Tenant>> {
        self.fixtures.fetch_tenant(tenant_id).await
    }

    async fn fetch_process(&self, process_id: &str) -> SentinelResult<Option<Process>> {
        self.fixtures.fetch_process(process_id).await
    }

    async fn upload_process(&self, upload: ProcessUpload) -> SentinelResult<Process> {
        self.require_auth("uploading processes")?;
        upload.validate()?;
        self.remote.upload_process(&upload).await.map_err(|e| {
            error!(tenant_id = %upload.tenant_id, error = %e, "process upload failed");
            SentinelError::from(e)
        })
    }
}
