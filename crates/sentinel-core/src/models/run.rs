//! Process run domain model.
//!
//! Runs are immutable execution records produced by the backend. The
//! full detail of a run (per-user trigger summaries plus the log tail)
//! is materialized lazily per run id, not pre-loaded with the run list.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::trigger::TriggerSummary;
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    Success,
    Failed,
    InProgress,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStatus::Success => "success",
            RunStatus::Failed => "failed",
            RunStatus::InProgress => "in-progress",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRun {
    pub id: String,
    pub process_id: String,
    pub run_date: NaiveDate,
    pub status: RunStatus,
    /// Wall-clock duration in minutes.
    pub duration: u32,
    pub users_involved: u32,
    pub records_processed: u64,
    pub total_trigger_hits: u32,
}

/// One user paired with the triggers that fired for them in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTriggerSummary {
    pub user: User,
    /// Sum of the hit counts of `triggers`.
    pub trigger_hit_count: u32,
    pub triggers: Vec<TriggerSummary>,
}

/// Lazily-materialized expansion of a [`ProcessRun`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRunDetail {
    pub id: String,
    pub process_id: String,
    pub run_date: NaiveDate,
    pub status: RunStatus,
    pub duration: u32,
    pub users: Vec<UserTriggerSummary>,
    pub records_processed: u64,
    /// Ordered log lines for the run.
    pub logs: Vec<String>,
    pub total_trigger_hits: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_status_uses_kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&RunStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let status: RunStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, RunStatus::Failed);
    }

    #[test]
    fn run_fields_use_camel_case_on_the_wire() {
        let run = ProcessRun {
            id: "r1".into(),
            process_id: "p1".into(),
            run_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: RunStatus::Success,
            duration: 45,
            users_involved: 3,
            records_processed: 1250,
            total_trigger_hits: 47,
        };
        let value = serde_json::to_value(&run).unwrap();
        assert_eq!(value["processId"], "p1");
        assert_eq!(value["usersInvolved"], 3);
        assert_eq!(value["totalTriggerHits"], 47);
    }
}
