//! Analyst user domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An analyst that appeared in a process run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub last_activity: NaiveDateTime,
}
