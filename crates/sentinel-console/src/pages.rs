//! Text renderings of the console pages.
//!
//! Every page fetches the data it needs from the identifiers in its
//! own path segments, so a deep path resolves without any state from a
//! parent page. Missing records render as a not-found page state, not
//! a fatal error.

use sentinel_client::SentinelClient;
use sentinel_core::fetch::FetchSequence;
use sentinel_core::filter::{tally_processes, tally_tenants, ProcessFilter, TenantFilter};
use sentinel_core::models::Tenant;
use sentinel_core::route::Route;
use sentinel_core::{DataSource, SentinelResult};
use sentinel_session::{CredentialStore, SelectionState};
use tracing::debug;

pub struct Console<S: CredentialStore> {
    client: SentinelClient<S>,
    selection: SelectionState,
    /// Guards the concurrent listing fetches: a response is applied
    /// only if no newer fetch was issued in the meantime.
    listing_fetches: FetchSequence,
}

impl<S: CredentialStore> Console<S> {
    pub fn new(client: SentinelClient<S>) -> Self {
        Self {
            client,
            selection: SelectionState::new(),
            listing_fetches: FetchSequence::new(),
        }
    }

    pub fn client(&self) -> &SentinelClient<S> {
        &self.client
    }

    pub async fn view(
        &mut self,
        route: &Route,
        process_filter: ProcessFilter,
        tenant_filter: TenantFilter,
    ) -> SentinelResult<()> {
        let result = self.dispatch(route, process_filter, tenant_filter).await;
        debug!(
            tenant = ?self.selection.selected_tenant(),
            process = ?self.selection.selected_process(),
            "selection after view"
        );
        result
    }

    async fn dispatch(
        &mut self,
        route: &Route,
        process_filter: ProcessFilter,
        tenant_filter: TenantFilter,
    ) -> SentinelResult<()> {
        match route {
            Route::ProcessList => self.process_list_page(process_filter).await,
            Route::ProcessHistory { process_id } => {
                self.selection.select_process(Some(process_id.clone()));
                self.process_history_page(process_id).await
            }
            Route::UserTriggers {
                process_id,
                session_id,
                user_id,
            } => {
                self.selection.select_process(Some(process_id.clone()));
                self.user_triggers_page(process_id, session_id, user_id)
                    .await
            }
            Route::TriggerTransactions {
                process_id,
                session_id,
                user_id,
                trigger_id,
            } => {
                self.selection.select_process(Some(process_id.clone()));
                self.trigger_transactions_page(process_id, session_id, user_id, trigger_id)
                    .await
            }
            Route::TenantManagement => {
                self.selection.select_process(None);
                self.tenant_management_page(tenant_filter).await
            }
        }
    }

    /// `/processes` — every monitoring process across tenants, with
    /// tenant names resolved from a parallel tenant fetch.
    async fn process_list_page(&mut self, filter: ProcessFilter) -> SentinelResult<()> {
        let ticket = self.listing_fetches.begin();
        let (processes, tenants) = tokio::join!(
            self.client.fetch_all_processes(),
            self.client.fetch_tenants(),
        );
        if !self.listing_fetches.is_current(ticket) {
            debug!("discarding stale process listing response");
            return Ok(());
        }
        let processes = processes?;
        let tenants = tenants?;

        let tally = tally_processes(&processes);
        println!("Processes ({} total)", tally.total);
        println!(
            "  running {}  completed {}  failed {}  paused {}",
            tally.running, tally.completed, tally.failed, tally.paused
        );
        println!();

        let filtered = filter.apply(&processes);
        if filtered.is_empty() {
            println!("No processes match the current filters.");
            return Ok(());
        }

        println!(
            "{:<6} {:<32} {:<24} {:<10} {:>9}  {}",
            "ID", "NAME", "TENANT", "STATUS", "RUNS", "CATEGORY"
        );
        for p in &filtered {
            println!(
                "{:<6} {:<32} {:<24} {:<10} {:>9}  {}",
                p.id,
                p.name,
                tenant_name(&tenants, &p.tenant_id),
                p.status,
                p.run_count,
                p.category
            );
        }
        Ok(())
    }

    /// `/processes/{pid}` — run history for one process.
    async fn process_history_page(&mut self, process_id: &str) -> SentinelResult<()> {
        let (process, runs) = tokio::join!(
            self.client.fetch_process(process_id),
            self.client.fetch_process_runs(process_id),
        );
        let runs = runs?;

        let Some(process) = process? else {
            println!("Process {process_id} not found.");
            return Ok(());
        };

        println!("{} ({})", process.name, process.id);
        println!("{}", process.description);
        println!(
            "status {}  category {}  valid {} to {}",
            process.status, process.category, process.start_date, process.end_date
        );
        println!();

        if runs.is_empty() {
            println!("No runs recorded.");
            return Ok(());
        }
        println!(
            "{:<6} {:<12} {:<12} {:>8} {:>7} {:>10} {:>6}",
            "RUN", "DATE", "STATUS", "MINUTES", "USERS", "RECORDS", "HITS"
        );
        for r in &runs {
            println!(
                "{:<6} {:<12} {:<12} {:>8} {:>7} {:>10} {:>6}",
                r.id,
                r.run_date.to_string(),
                r.status.to_string(),
                r.duration,
                r.users_involved,
                r.records_processed,
                r.total_trigger_hits
            );
        }
        Ok(())
    }

    /// `/processes/{pid}/{sid}/{uid}` — one user's triggers within one
    /// run. The run detail is materialized from the session id alone.
    async fn user_triggers_page(
        &mut self,
        process_id: &str,
        session_id: &str,
        user_id: &str,
    ) -> SentinelResult<()> {
        let detail = self.client.fetch_run_detail(session_id).await?;

        let Some(summary) = detail.users.iter().find(|u| u.user.id == user_id) else {
            println!("User {user_id} did not appear in run {session_id}.");
            return Ok(());
        };

        println!(
            "{} — run {} of process {} ({})",
            summary.user.name, session_id, process_id, detail.status
        );
        println!(
            "{} <{}> — {}, {}",
            summary.user.role, summary.user.email, summary.user.department, summary.user.id
        );
        if self.selection.preferences().show_timestamps {
            println!("last activity {}", summary.user.last_activity);
        }
        println!("{} trigger hits in this run", summary.trigger_hit_count);
        println!();

        println!(
            "{:<6} {:<28} {:<18} {:<10} {:>5}",
            "ID", "TRIGGER", "TYPE", "SEVERITY", "HITS"
        );
        for t in &summary.triggers {
            println!(
                "{:<6} {:<28} {:<18} {:<10} {:>5}",
                t.id, t.name, t.rule_type, t.severity, t.hit_count
            );
        }
        println!();
        println!("Run log:");
        for line in &detail.logs {
            println!("  {line}");
        }
        Ok(())
    }

    /// `/processes/{pid}/{sid}/{uid}/{tid}` — flagged transactions
    /// behind one trigger hit.
    async fn trigger_transactions_page(
        &mut self,
        process_id: &str,
        session_id: &str,
        user_id: &str,
        trigger_id: &str,
    ) -> SentinelResult<()> {
        let detail = self
            .client
            .fetch_trigger_detail(trigger_id, user_id, session_id)
            .await?;

        println!(
            "{} [{}] — severity {} (process {}, run {}, user {})",
            detail.name, detail.rule_type, detail.severity, process_id, session_id, user_id
        );
        println!("{}", detail.description);
        println!("rule: {}", detail.rule_definition);
        if self.selection.preferences().show_timestamps {
            println!("last triggered {}", detail.last_triggered);
        }
        println!();

        if detail.transactions.is_empty() {
            println!("No flagged transactions.");
            return Ok(());
        }
        println!(
            "{:<5} {:>12} {:<4} {:<14} {:<14} {:<10} {:>5}  {}",
            "ID", "AMOUNT", "CCY", "FROM", "TO", "STATUS", "RISK", "REASONS"
        );
        for tx in &detail.transactions {
            println!(
                "{:<5} {:>12.2} {:<4} {:<14} {:<14} {:<10} {:>5}  {}",
                tx.id,
                tx.amount,
                tx.currency,
                tx.from_account,
                tx.to_account,
                tx.status,
                tx.risk_score,
                tx.flagged_reasons.join(", ")
            );
        }
        Ok(())
    }

    /// `/tenants` — tenant listing and management.
    async fn tenant_management_page(&mut self, filter: TenantFilter) -> SentinelResult<()> {
        let ticket = self.listing_fetches.begin();
        let tenants = self.client.fetch_tenants().await;
        if !self.listing_fetches.is_current(ticket) {
            debug!("discarding stale tenant listing response");
            return Ok(());
        }
        let tenants = tenants?;

        let tally = tally_tenants(&tenants);
        println!("Tenants ({} total)", tally.total);
        println!(
            "  active {}  inactive {}  suspended {}",
            tally.active, tally.inactive, tally.suspended
        );
        println!();

        let filtered = filter.apply(&tenants);
        if filtered.is_empty() {
            println!("No tenants match the current filters.");
            return Ok(());
        }
        print_tenant_table(&filtered);
        Ok(())
    }

    /// One tenant plus the processes it owns.
    pub async fn tenant_detail_page(&mut self, tenant_id: &str) -> SentinelResult<()> {
        self.selection.select_tenant(Some(tenant_id.to_string()));

        let (tenant, processes) = tokio::join!(
            self.client.fetch_tenant(tenant_id),
            self.client.fetch_tenant_processes(tenant_id),
        );
        let processes = processes?;

        let Some(tenant) = tenant? else {
            println!("Tenant {tenant_id} not found.");
            return Ok(());
        };

        println!("{} ({})", tenant.name, tenant.id);
        println!("{}", tenant.description);
        println!(
            "status {}  country {}  created {}  processes {}",
            tenant.status, tenant.country, tenant.created_at, tenant.process_count
        );
        println!();

        if processes.is_empty() {
            println!("No processes for this tenant.");
            return Ok(());
        }
        println!(
            "{:<6} {:<32} {:<10} {:>9}  {}",
            "ID", "NAME", "STATUS", "RUNS", "CATEGORY"
        );
        for p in &processes {
            println!(
                "{:<6} {:<32} {:<10} {:>9}  {}",
                p.id, p.name, p.status, p.run_count, p.category
            );
        }
        Ok(())
    }
}

fn tenant_name<'a>(tenants: &'a [Tenant], tenant_id: &'a str) -> &'a str {
    tenants
        .iter()
        .find(|t| t.id == tenant_id)
        .map(|t| t.name.as_str())
        .unwrap_or(tenant_id)
}

fn print_tenant_table(tenants: &[Tenant]) {
    println!(
        "{:<10} {:<28} {:<10} {:<12} {:>9}  {}",
        "ID", "NAME", "STATUS", "COUNTRY", "PROCESSES", "CREATED"
    );
    for t in tenants {
        println!(
            "{:<10} {:<28} {:<10} {:<12} {:>9}  {}",
            t.id, t.name, t.status, t.country, t.process_count, t.created_at
        );
    }
}
