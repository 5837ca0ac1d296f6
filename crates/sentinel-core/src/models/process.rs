//! Process domain model.
//!
//! A process is a configured, recurring compliance-screening job
//! scoped to a tenant. Processes enter the system through upload and
//! are read-only afterwards in this client.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SentinelError, SentinelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Running,
    Completed,
    Failed,
    Paused,
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessStatus::Running => "running",
            ProcessStatus::Completed => "completed",
            ProcessStatus::Failed => "failed",
            ProcessStatus::Paused => "paused",
        };
        f.pad(s)
    }
}

impl FromStr for ProcessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(ProcessStatus::Running),
            "completed" => Ok(ProcessStatus::Completed),
            "failed" => Ok(ProcessStatus::Failed),
            "paused" => Ok(ProcessStatus::Paused),
            other => Err(format!("unknown process status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub description: String,
    /// Validity window start.
    pub start_date: NaiveDate,
    /// Validity window end.
    pub end_date: NaiveDate,
    pub last_run_date: NaiveDate,
    pub status: ProcessStatus,
    /// Cumulative number of executions.
    pub run_count: u64,
    pub category: String,
}

/// Multipart payload for uploading a new process definition.
///
/// `schedule` is a 6-field cron expression
/// (seconds minutes hours day-of-month month day-of-week).
#[derive(Debug, Clone)]
pub struct ProcessUpload {
    pub tenant_id: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub schedule: String,
    pub product_name: String,
    pub group_name: String,
    pub file_name: String,
    /// CSV data file contents.
    pub file: Vec<u8>,
}

/// Default schedule: daily at midnight.
pub const DEFAULT_SCHEDULE: &str = "0 0 0 * * ?";

impl ProcessUpload {
    /// Check the payload is complete and the schedule has the expected
    /// 6-field cron shape. The expression itself is interpreted by the
    /// backend; only its arity is checked here.
    pub fn validate(&self) -> SentinelResult<()> {
        if self.tenant_id.is_empty() {
            return Err(SentinelError::Validation {
                message: "tenant id is required".into(),
            });
        }
        if self.product_name.is_empty() || self.group_name.is_empty() {
            return Err(SentinelError::Validation {
                message: "product name and group name are required".into(),
            });
        }
        let fields = self.schedule.split_whitespace().count();
        if fields != 6 {
            return Err(SentinelError::Validation {
                message: format!("schedule must have 6 cron fields, got {fields}"),
            });
        }
        Ok(())
    }

    /// Derive the client-side view of the uploaded process, used when
    /// the upload endpoint acknowledges without returning a body.
    pub fn derive_process(&self, id: String, last_run_date: NaiveDate) -> Process {
        Process {
            id,
            tenant_id: self.tenant_id.clone(),
            name: format!("{} - {}", self.product_name, self.group_name),
            description: format!(
                "Process for {} in {} group",
                self.product_name, self.group_name
            ),
            start_date: self.starts_on,
            end_date: self.ends_on,
            last_run_date,
            status: ProcessStatus::Running,
            run_count: 0,
            category: self.group_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(schedule: &str) -> ProcessUpload {
        ProcessUpload {
            tenant_id: "1".into(),
            starts_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ends_on: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            schedule: schedule.into(),
            product_name: "AML Screening".into(),
            group_name: "Compliance".into(),
            file_name: "data.csv".into(),
            file: b"a,b\n1,2\n".to_vec(),
        }
    }

    #[test]
    fn default_schedule_is_valid() {
        assert!(upload(DEFAULT_SCHEDULE).validate().is_ok());
    }

    #[test]
    fn five_field_schedule_is_rejected() {
        let err = upload("0 0 * * *").validate().unwrap_err();
        assert!(matches!(err, SentinelError::Validation { .. }));
    }

    #[test]
    fn derived_process_names_follow_product_and_group() {
        let up = upload(DEFAULT_SCHEDULE);
        let p = up.derive_process("process-x".into(), up.starts_on);
        assert_eq!(p.name, "AML Screening - Compliance");
        assert_eq!(p.category, "Compliance");
        assert_eq!(p.status, ProcessStatus::Running);
        assert_eq!(p.run_count, 0);
    }
}
