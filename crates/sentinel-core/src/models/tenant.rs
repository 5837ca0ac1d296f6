//! Tenant domain model.
//!
//! A tenant is an organizational client of the compliance platform.
//! Tenants are created and deleted through explicit operations; there
//! is no update path in this client.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tenant lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Inactive,
    Suspended,
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TenantStatus::Active => "active",
            TenantStatus::Inactive => "inactive",
            TenantStatus::Suspended => "suspended",
        };
        f.pad(s)
    }
}

impl FromStr for TenantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TenantStatus::Active),
            "inactive" => Ok(TenantStatus::Inactive),
            "suspended" => Ok(TenantStatus::Suspended),
            other => Err(format!("unknown tenant status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: TenantStatus,
    pub created_at: NaiveDate,
    /// Denormalized count of owned processes. Backend-owned and
    /// eventually consistent; never recomputed client-side.
    pub process_count: u32,
    pub country: String,
}

/// Payload for creating a tenant (the backend's FIU registration DTO).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiuRequest {
    pub tenant_id: String,
    pub password: String,
    pub fiu_id: String,
}
