//! Command-line surface of the console.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sentinel_core::models::process::DEFAULT_SCHEDULE;

/// Sentinel compliance console.
#[derive(Parser)]
#[command(name = "sentinel-console", version, about = "Sentinel compliance console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the page at a console path, e.g. /processes/p1/r3/u2
    View {
        /// Console path: /processes[/{pid}[/{sid}/{uid}[/{tid}]]] or /tenants
        path: String,
        /// Free-text search term for listing pages
        #[arg(long)]
        search: Option<String>,
        /// Status filter for listing pages ("all" passes everything)
        #[arg(long)]
        status: Option<String>,
        /// Owning-tenant filter for the process listing
        #[arg(long)]
        tenant: Option<String>,
    },

    /// Show one tenant and the processes it owns
    TenantDetail {
        tenant_id: String,
    },

    /// Authenticate against the backend and persist the session
    Login {
        user_id: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the session and persisted credentials
    Logout,

    /// Show the authenticated user, if any
    Whoami,

    /// Register a new tenant (requires login)
    CreateTenant {
        tenant_id: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        fiu_id: String,
    },

    /// Delete a tenant by id (requires login)
    DeleteTenant {
        tenant_id: String,
    },

    /// Upload a process definition with its CSV data file (requires login)
    UploadProcess {
        /// Owning tenant id
        #[arg(long)]
        tenant: String,
        /// Validity window start (YYYY-MM-DD)
        #[arg(long)]
        starts_on: NaiveDate,
        /// Validity window end (YYYY-MM-DD)
        #[arg(long)]
        ends_on: NaiveDate,
        /// 6-field cron schedule (seconds minutes hours dom month dow)
        #[arg(long, default_value = DEFAULT_SCHEDULE)]
        freq: String,
        #[arg(long)]
        product: String,
        #[arg(long)]
        group: String,
        /// CSV data file
        file: PathBuf,
    },
}
