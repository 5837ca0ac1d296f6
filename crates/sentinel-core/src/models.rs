//! Domain models for the Sentinel console.
//!
//! These are the client-side shapes of the compliance platform's
//! entities. Ids are opaque backend-assigned strings.

pub mod auth;
pub mod process;
pub mod run;
pub mod tenant;
pub mod transaction;
pub mod trigger;
pub mod user;

pub use auth::{AuthUser, LoginRequest, LoginResponse};
pub use process::{Process, ProcessStatus, ProcessUpload};
pub use run::{ProcessRun, ProcessRunDetail, RunStatus, UserTriggerSummary};
pub use tenant::{FiuRequest, Tenant, TenantStatus};
pub use transaction::{Transaction, TransactionStatus};
pub use trigger::{Severity, TriggerDetail, TriggerSummary};
pub use user::User;
