//! Routing contract for the drill-down hierarchy.
//!
//! `/processes` → `/processes/{processId}` →
//! `/processes/{processId}/{sessionId}/{userId}` →
//! `/processes/{processId}/{sessionId}/{userId}/{triggerId}`, with
//! `/tenants` as a parallel top-level path. Child identifiers are
//! carried in the path and never re-derived; a page at any depth must
//! resolve from its own segments alone, so a deep link works without
//! in-memory state from a parent page.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("unrecognized path: {path}")]
pub struct RouteParseError {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/processes` — all-process listing.
    ProcessList,
    /// `/processes/{processId}` — run history for one process.
    ProcessHistory { process_id: String },
    /// `/processes/{processId}/{sessionId}/{userId}` — one user's
    /// triggers within one run.
    UserTriggers {
        process_id: String,
        session_id: String,
        user_id: String,
    },
    /// `/processes/{processId}/{sessionId}/{userId}/{triggerId}` —
    /// transactions behind one trigger hit.
    TriggerTransactions {
        process_id: String,
        session_id: String,
        user_id: String,
        trigger_id: String,
    },
    /// `/tenants` — tenant listing and management.
    TenantManagement,
}

impl Route {
    /// Resolve a URL path to a route. The root path redirects to the
    /// process listing.
    pub fn parse(path: &str) -> Result<Route, RouteParseError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Route::ProcessList),
            ["processes"] => Ok(Route::ProcessList),
            ["processes", pid] => Ok(Route::ProcessHistory {
                process_id: (*pid).to_string(),
            }),
            ["processes", pid, sid, uid] => Ok(Route::UserTriggers {
                process_id: (*pid).to_string(),
                session_id: (*sid).to_string(),
                user_id: (*uid).to_string(),
            }),
            ["processes", pid, sid, uid, tid] => Ok(Route::TriggerTransactions {
                process_id: (*pid).to_string(),
                session_id: (*sid).to_string(),
                user_id: (*uid).to_string(),
                trigger_id: (*tid).to_string(),
            }),
            ["tenants"] => Ok(Route::TenantManagement),
            _ => Err(RouteParseError { path: path.into() }),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::ProcessList => write!(f, "/processes"),
            Route::ProcessHistory { process_id } => write!(f, "/processes/{process_id}"),
            Route::UserTriggers {
                process_id,
                session_id,
                user_id,
            } => write!(f, "/processes/{process_id}/{session_id}/{user_id}"),
            Route::TriggerTransactions {
                process_id,
                session_id,
                user_id,
                trigger_id,
            } => write!(
                f,
                "/processes/{process_id}/{session_id}/{user_id}/{trigger_id}"
            ),
            Route::TenantManagement => write!(f, "/tenants"),
        }
    }
}
