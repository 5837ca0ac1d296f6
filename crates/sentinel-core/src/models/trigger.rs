//! Compliance rule (trigger) domain model.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Ordinal risk classification of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSummary {
    pub id: String,
    pub name: String,
    /// Rule classification label (e.g. "Amount Threshold", "Velocity").
    #[serde(rename = "type")]
    pub rule_type: String,
    pub severity: Severity,
    pub hit_count: u32,
    pub description: String,
}

/// Full rule detail, owning the flagged transactions behind a hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDetail {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub rule_type: String,
    pub severity: Severity,
    pub description: String,
    /// Textual rule definition as configured on the backend.
    pub rule_definition: String,
    pub transactions: Vec<Transaction>,
    pub created_at: NaiveDate,
    pub last_triggered: NaiveDateTime,
}
