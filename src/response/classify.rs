use std::collections::HashMap;

use chrono::Utc;

use super::parse::parse_response_blob;
use super::types::{ActivityResult, PaymentOutcome, PaymentStatus, RESULT_CANCELED, RESULT_OK};

const SUCCESS_MARKERS: [&str; 2] = ["success", "submitted"];
const FAILURE_MARKERS: [&str; 2] = ["failure", "failed"];

fn has_marker(value: &str, markers: &[&str]) -> bool {
    markers.contains(&value.to_lowercase().as_str())
}

/// Classify the payment status from the callback payload.
///
/// First match wins: blob `Status` success marker, top-level `Status`
/// success marker, ok result code, blob failure marker, top-level failure
/// marker, cancelled result code, otherwise unknown. Note that an ok
/// result code outranks explicit failure markers.
pub fn classify(result: &ActivityResult, blob_fields: &HashMap<String, String>) -> PaymentStatus {
    let blob_status = blob_fields.get("Status").map(String::as_str).unwrap_or("");

    if has_marker(blob_status, &SUCCESS_MARKERS)
        || has_marker(&result.status, &SUCCESS_MARKERS)
        || result.result_code == RESULT_OK
    {
        return PaymentStatus::Success;
    }

    if has_marker(blob_status, &FAILURE_MARKERS) || has_marker(&result.status, &FAILURE_MARKERS) {
        return PaymentStatus::Failure;
    }

    if result.result_code == RESULT_CANCELED {
        return PaymentStatus::Cancelled;
    }

    PaymentStatus::Unknown
}

/// Extract the transaction id, first non-empty source wins: blob `txnId`,
/// top-level `txnId`, top-level `ApprovalRefNo`, blob `ApprovalRefNo`.
pub fn transaction_id(result: &ActivityResult, blob_fields: &HashMap<String, String>) -> String {
    if let Some(id) = blob_fields.get("txnId").filter(|v| !v.is_empty()) {
        return id.clone();
    }
    if !result.txn_id.is_empty() {
        return result.txn_id.clone();
    }
    if !result.approval_ref_no.is_empty() {
        return result.approval_ref_no.clone();
    }
    if let Some(id) = blob_fields.get("ApprovalRefNo").filter(|v| !v.is_empty()) {
        return id.clone();
    }
    String::new()
}

/// Transaction reference: the blob `txnRef` when present (even if empty),
/// otherwise the top-level extra.
pub fn transaction_reference(
    result: &ActivityResult,
    blob_fields: &HashMap<String, String>,
) -> String {
    blob_fields
        .get("txnRef")
        .cloned()
        .unwrap_or_else(|| result.txn_ref.clone())
}

/// Resolve a raw callback payload into the normalized outcome.
pub fn resolve(result: ActivityResult) -> PaymentOutcome {
    let blob_fields = parse_response_blob(&result.response);

    let status = classify(&result, &blob_fields);
    let txn_id = transaction_id(&result, &blob_fields);
    let txn_ref = transaction_reference(&result, &blob_fields);

    PaymentOutcome {
        status,
        txn_id,
        txn_ref,
        raw_response: result.response,
        raw_status: result.status,
        result_code: result.result_code,
        completed_at: Utc::now(),
    }
}
