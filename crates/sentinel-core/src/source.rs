//! Data-source trait — the façade every page fetches through.
//!
//! All operations are async. Implementations decide where the data
//! comes from (live backend, fixtures, or a fallback composition of
//! both); callers see one contract. Lookup operations that a page can
//! recover from (`fetch_tenant`, `fetch_process`) return `Ok(None)`
//! for unknown ids rather than an error.

use std::future::Future;

use crate::error::SentinelResult;
use crate::models::{
    FiuRequest, Process, ProcessRun, ProcessRunDetail, ProcessUpload, Tenant, TriggerDetail,
};

pub trait DataSource: Send + Sync {
    fn fetch_tenants(&self) -> impl Future<Output = SentinelResult<Vec<Tenant>>> + Send;

    /// Create a tenant. Requires an authenticated session.
    fn create_tenant(
        &self,
        input: FiuRequest,
    ) -> impl Future<Output = SentinelResult<Tenant>> + Send;

    /// Delete a tenant by id. Requires an authenticated session.
    fn delete_tenant(&self, tenant_id: &str) -> impl Future<Output = SentinelResult<()>> + Send;

    fn fetch_all_processes(&self) -> impl Future<Output = SentinelResult<Vec<Process>>> + Send;

    fn fetch_tenant_processes(
        &self,
        tenant_id: &str,
    ) -> impl Future<Output = SentinelResult<Vec<Process>>> + Send;

    fn fetch_process_runs(
        &self,
        process_id: &str,
    ) -> impl Future<Output = SentinelResult<Vec<ProcessRun>>> + Send;

    /// Materialize the full detail of one run.
    fn fetch_run_detail(
        &self,
        run_id: &str,
    ) -> impl Future<Output = SentinelResult<ProcessRunDetail>> + Send;

    /// Fetch one trigger's detail scoped to a user within a run.
    fn fetch_trigger_detail(
        &self,
        trigger_id: &str,
        user_id: &str,
        session_id: &str,
    ) -> impl Future<Output = SentinelResult<TriggerDetail>> + Send;

    fn fetch_tenant(
        &self,
        tenant_id: &str,
    ) -> impl Future<Output = SentinelResult<Option<Tenant>>> + Send;

    fn fetch_process(
        &self,
        process_id: &str,
    ) -> impl Future<Output = SentinelResult<Option<Process>>> + Send;

    /// Upload a new process definition. Requires an authenticated
    /// session.
    fn upload_process(
        &self,
        upload: ProcessUpload,
    ) -> impl Future<Output = SentinelResult<Process>> + Send;
}
