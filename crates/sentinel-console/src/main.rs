//! Sentinel Console — application entry point.

mod cli;
mod pages;

use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use sentinel_client::{ApiConfig, FixtureConfig, SentinelClient};
use sentinel_core::filter::{ProcessFilter, TenantFilter};
use sentinel_core::models::{AuthUser, FiuRequest, LoginRequest, ProcessUpload};
use sentinel_core::route::Route;
use sentinel_core::{DataSource, SentinelError, SentinelResult};
use sentinel_session::{FileCredentialStore, SessionStore};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::pages::Console;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Directory holding the two persisted credential entries.
fn state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SENTINEL_STATE_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".sentinel-console"),
        Err(_) => PathBuf::from(".sentinel-console"),
    }
}

fn api_config() -> ApiConfig {
    let mut config = ApiConfig::default();
    if let Ok(url) = std::env::var("SENTINEL_API_URL") {
        config.base_url = url;
    }
    config
}

/// Parse a `--status` value; the sentinel "all" passes everything.
fn status_filter<T: FromStr<Err = String>>(value: Option<String>) -> SentinelResult<Option<T>> {
    match value.as_deref() {
        None | Some("all") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|message| SentinelError::Validation { message }),
    }
}

async fn run(cli: Cli) -> SentinelResult<()> {
    let session = Arc::new(SessionStore::new(FileCredentialStore::new(state_dir())));
    session.restore();

    let client = SentinelClient::new(api_config(), FixtureConfig::default(), Arc::clone(&session))
        .map_err(|e| SentinelError::Upstream(e.to_string()))?;
    let mut console = Console::new(client);

    match cli.command {
        Commands::View {
            path,
            search,
            status,
            tenant,
        } => {
            let route = Route::parse(&path).map_err(|e| SentinelError::Validation {
                message: e.to_string(),
            })?;
            let term = search.unwrap_or_default();
            // The status vocabulary differs per listing, so only the
            // filter for the routed page is parsed.
            let (process_filter, tenant_filter) = match route {
                Route::TenantManagement => (
                    ProcessFilter::default(),
                    TenantFilter {
                        term,
                        status: status_filter(status)?,
                    },
                ),
                _ => (
                    ProcessFilter {
                        term,
                        status: status_filter(status)?,
                        tenant_id: tenant,
                    },
                    TenantFilter::default(),
                ),
            };
            console.view(&route, process_filter, tenant_filter).await
        }

        Commands::TenantDetail { tenant_id } => console.tenant_detail_page(&tenant_id).await,

        Commands::Login { user_id, password } => {
            let user_id = user_id.trim().to_string();
            let password = password.trim().to_string();
            if user_id.is_empty() || password.is_empty() {
                return Err(SentinelError::Validation {
                    message: "both user id and password are required".into(),
                });
            }

            let response = console
                .client()
                .login(&LoginRequest {
                    user_id: user_id.clone(),
                    password,
                })
                .await?;
            let token = response
                .token
                .ok_or_else(|| SentinelError::AuthenticationFailed {
                    reason: "no token in login response".into(),
                })?;
            let user = AuthUser {
                user_id: response.user_id.unwrap_or_else(|| user_id.clone()),
                username: response.username.unwrap_or(user_id),
            };
            session.login(token, user.clone())?;
            println!("Logged in as {}.", user.username);
            Ok(())
        }

        Commands::Logout => {
            session.logout();
            println!("Logged out.");
            Ok(())
        }

        Commands::Whoami => {
            match session.auth_user() {
                Some(user) => println!("{} ({})", user.username, user.user_id),
                None => println!("Not authenticated (browsing demo data)."),
            }
            Ok(())
        }

        Commands::CreateTenant {
            tenant_id,
            password,
            fiu_id,
        } => {
            let tenant = console
                .client()
                .create_tenant(FiuRequest {
                    tenant_id,
                    password,
                    fiu_id,
                })
                .await?;
            println!("Created tenant {} ({}).", tenant.name, tenant.id);
            Ok(())
        }

        Commands::DeleteTenant { tenant_id } => {
            console.client().delete_tenant(&tenant_id).await?;
            println!("Deleted tenant {tenant_id}.");
            Ok(())
        }

        Commands::UploadProcess {
            tenant,
            starts_on,
            ends_on,
            freq,
            product,
            group,
            file,
        } => {
            let bytes = std::fs::read(&file).map_err(|e| SentinelError::Validation {
                message: format!("cannot read {}: {e}", file.display()),
            })?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.csv".into());

            let process = console
                .client()
                .upload_process(ProcessUpload {
                    tenant_id: tenant,
                    starts_on,
                    ends_on,
                    schedule: freq,
                    product_name: product,
                    group_name: group,
                    file_name,
                    file: bytes,
                })
                .await?;
            println!("Uploaded process {} ({}).", process.name, process.id);
            Ok(())
        }
    }
}
