//! Fixture-backed [`DataSource`] implementation.
//!
//! Serves the deterministic demo data set after an artificial
//! per-endpoint latency that simulates realistic loading states. Read
//! operations never fail; lookups of unknown tenant/process ids yield
//! `Ok(None)`, unknown run/trigger ids yield `NotFound`.
//!
//! Run-detail synthesis samples users and triggers at random to
//! produce varied demo data. The sampling is intentionally
//! non-deterministic unless a seed is pinned through
//! [`FixtureConfig::seed`].

mod data;

use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sentinel_core::error::{SentinelError, SentinelResult};
use sentinel_core::models::{
    FiuRequest, Process, ProcessRun, ProcessRunDetail, ProcessUpload, Tenant, TriggerDetail,
    UserTriggerSummary,
};
use sentinel_core::DataSource;
use tracing::debug;

use crate::config::FixtureConfig;

/// Rule text shown for every fixture trigger.
const FIXTURE_RULE_DEFINITION: &str =
    "IF transaction.amount > 10000 AND transaction.type = 'CASH' THEN flag = TRUE";

pub struct FixtureStore {
    config: FixtureConfig,
    rng: Mutex<StdRng>,
}

impl FixtureStore {
    pub fn new(config: FixtureConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Simulated endpoint latency, weighted per endpoint.
    async fn simulate_latency(&self, ms: u64) {
        if self.config.simulate_latency {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    /// Pair each selected user with 2–4 randomly sampled triggers and
    /// the sum of their hit counts.
    fn synthesize_user_summaries(&self, users_involved: usize) -> Vec<UserTriggerSummary> {
        let mut rng = self.rng.lock().expect("fixture rng lock poisoned");

        let mut users = data::users();
        users.shuffle(&mut *rng);
        users.truncate(users_involved);

        users
            .into_iter()
            .map(|user| {
                let mut triggers = data::triggers();
                triggers.shuffle(&mut *rng);
                triggers.truncate(rng.gen_range(2..=4));
                let trigger_hit_count = triggers.iter().map(|t| t.hit_count).sum();
                UserTriggerSummary {
                    user,
                    trigger_hit_count,
                    triggers,
                }
            })
            .collect()
    }

    fn run_logs(run: &ProcessRun) -> Vec<String> {
        let outcome = if run.status == sentinel_core::models::RunStatus::Success {
            "Process completed successfully"
        } else {
            "Process encountered errors"
        };
        vec![
            "Process started successfully".into(),
            "Data validation completed".into(),
            "AML screening initiated".into(),
            format!("{} triggers detected", run.total_trigger_hits),
            outcome.into(),
        ]
    }
}

impl DataSource for FixtureStore {
    async fn fetch_tenants(&self) -> SentinelResult<Vec<Tenant>> {
        self.simulate_latency(800).await;
        Ok(data::tenants())
    }

    /// Fixture mode cannot create tenants: writes must reach the
    /// authoritative store.
    async fn create_tenant(&self, input: FiuRequest) -> SentinelResult<Tenant> {
        Err(SentinelError::Upstream(format!(
            "cannot create tenant {} without a live backend",
            input.tenant_id
        )))
    }

    async fn delete_tenant(&self, tenant_id: &str) -> SentinelResult<()> {
        Err(SentinelError::Upstream(format!(
            "cannot delete tenant {tenant_id} without a live backend"
        )))
    }

    async fn fetch_all_processes(&self) -> SentinelResult<Vec<Process>> {
        self.simulate_latency(600).await;
        Ok(data::processes())
    }

    async fn fetch_tenant_processes(&self, tenant_id: &str) -> SentinelResult<Vec<Process>> {
        self.simulate_latency(600).await;
        Ok(data::processes()
            .into_iter()
            .filter(|p| p.tenant_id == tenant_id)
            .collect())
    }

    async fn fetch_process_runs(&self, process_id: &str) -> SentinelResult<Vec<ProcessRun>> {
        self.simulate_latency(500).await;
        Ok(data::runs()
            .into_iter()
            .filter(|r| r.process_id == process_id)
            .collect())
    }

    async fn fetch_run_detail(&self, run_id: &str) -> SentinelResult<ProcessRunDetail> {
        self.simulate_latency(400).await;

        let run = data::runs()
            .into_iter()
            .find(|r| r.id == run_id)
            .ok_or_else(|| SentinelError::NotFound {
                entity: "process run".into(),
                id: run_id.into(),
            })?;

        let users = self.synthesize_user_summaries(run.users_involved as usize);
        let logs = Self::run_logs(&run);
        debug!(run_id, users = users.len(), "synthesized run detail");

        Ok(ProcessRunDetail {
            id: run.id,
            process_id: run.process_id,
            run_date: run.run_date,
            status: run.status,
            duration: run.duration,
            users,
            records_processed: run.records_processed,
            logs,
            total_trigger_hits: run.total_trigger_hits,
        })
    }

    async fn fetch_trigger_detail(
        &self,
        trigger_id: &str,
        user_id: &str,
        session_id: &str,
    ) -> SentinelResult<TriggerDetail> {
        self.simulate_latency(600).await;
        debug!(trigger_id, user_id, session_id, "resolving trigger detail");

        let trigger = data::triggers()
            .into_iter()
            .find(|t| t.id == trigger_id)
            .ok_or_else(|| SentinelError::NotFound {
                entity: "trigger".into(),
                id: trigger_id.into(),
            })?;

        let mut transactions = data::transactions();
        {
            let mut rng = self.rng.lock().expect("fixture rng lock poisoned");
            transactions.shuffle(&mut *rng);
        }
        transactions.truncate(trigger.hit_count as usize);

        Ok(TriggerDetail {
            id: trigger.id,
            name: trigger.name,
            rule_type: trigger.rule_type,
            severity: trigger.severity,
            description: trigger.description,
            rule_definition: FIXTURE_RULE_DEFINITION.into(),
            transactions,
            created_at: chrono::NaiveDate::from_ymd_opt(2023, 1, 15).expect("valid fixture date"),
            last_triggered: chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
                .and_then(|d| d.and_hms_opt(14, 30, 0))
                .expect("valid fixture time"),
        })
    }

    async fn fetch_tenant(&self, tenant_id: &str) -> SentinelResult<Option<Tenant>> {
        self.simulate_latency(300).await;
        Ok(data::tenants().into_iter().find(|t| t.id == tenant_id))
    }

    async fn fetch_process(&self, process_id: &str) -> SentinelResult<Option<Process>> {
        self.simulate_latency(300).await;
        Ok(data::processes().into_iter().find(|p| p.id == process_id))
    }

    async fn upload_process(&self, upload: ProcessUpload) -> SentinelResult<Process> {
        Err(SentinelError::Upstream(format!(
            "cannot upload process for tenant {} without a live backend",
            upload.tenant_id
        )))
    }
}
