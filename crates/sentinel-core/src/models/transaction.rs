//! Flagged transaction domain model.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        };
        f.pad(s)
    }
}

/// A single flagged monetary movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub currency: String,
    pub from_account: String,
    pub to_account: String,
    pub timestamp: NaiveDateTime,
    pub description: String,
    pub status: TransactionStatus,
    /// 0–100 risk score assigned by the screening engine.
    pub risk_score: u8,
    pub flagged_reasons: Vec<String>,
}
