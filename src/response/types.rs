use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform result code for a completed activity.
pub const RESULT_OK: i32 = -1;
/// Platform result code for a cancelled activity.
pub const RESULT_CANCELED: i32 = 0;

/// The raw callback payload delivered by the platform when the handler
/// application returns. Extras keep their wire names; any of them may be
/// empty depending on which handler produced the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityResult {
    #[serde(rename = "resultCode")]
    pub result_code: i32,
    /// Raw `key=value&key=value` response blob
    pub response: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "txnId")]
    pub txn_id: String,
    #[serde(rename = "txnRef")]
    pub txn_ref: String,
    #[serde(rename = "ApprovalRefNo")]
    pub approval_ref_no: String,
}

/// Normalized payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failure,
    Cancelled,
    Unknown,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failure => "failure",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Unknown => "unknown",
        };
        f.write_str(value)
    }
}

/// What the caller gets back: the normalized status and identifiers plus
/// the raw material they were derived from.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentOutcome {
    pub status: PaymentStatus,
    pub txn_id: String,
    pub txn_ref: String,
    pub raw_response: String,
    pub raw_status: String,
    pub result_code: i32,
    pub completed_at: DateTime<Utc>,
}
