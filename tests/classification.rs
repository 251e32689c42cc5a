//! End-to-end checks of the response fallback chains, driven through
//! `resolve` the way the bridge applies them.

use upilink::response::{
    ActivityResult, PaymentStatus, RESULT_CANCELED, RESULT_OK, resolve,
};

fn result(code: i32, response: &str, status: &str) -> ActivityResult {
    ActivityResult {
        result_code: code,
        response: response.to_string(),
        status: status.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_blob_status_has_highest_priority() {
    // Even a cancelled result code loses to an explicit blob status
    let outcome = resolve(result(RESULT_CANCELED, "Status=SUCCESS", ""));
    assert_eq!(outcome.status, PaymentStatus::Success);
}

#[test]
fn test_extra_status_when_blob_is_silent() {
    let outcome = resolve(result(RESULT_CANCELED, "txnId=TXN1", "submitted"));
    assert_eq!(outcome.status, PaymentStatus::Success);
}

#[test]
fn test_result_code_ok_alone_is_success() {
    let outcome = resolve(result(RESULT_OK, "", ""));
    assert_eq!(outcome.status, PaymentStatus::Success);
}

#[test]
fn test_ok_code_beats_failure_markers() {
    let outcome = resolve(result(RESULT_OK, "Status=failed", "failure"));
    assert_eq!(outcome.status, PaymentStatus::Success);
}

#[test]
fn test_failure_from_blob() {
    let outcome = resolve(result(1, "Status=FAILURE", ""));
    assert_eq!(outcome.status, PaymentStatus::Failure);
}

#[test]
fn test_failure_from_extra() {
    let outcome = resolve(result(1, "", "Failed"));
    assert_eq!(outcome.status, PaymentStatus::Failure);
}

#[test]
fn test_failure_beats_cancelled_code() {
    let outcome = resolve(result(RESULT_CANCELED, "Status=failed", ""));
    assert_eq!(outcome.status, PaymentStatus::Failure);
}

#[test]
fn test_cancelled_result_code() {
    let outcome = resolve(result(RESULT_CANCELED, "", ""));
    assert_eq!(outcome.status, PaymentStatus::Cancelled);
}

#[test]
fn test_unknown_when_nothing_matches() {
    let outcome = resolve(result(1, "foo=bar", "pending"));
    assert_eq!(outcome.status, PaymentStatus::Unknown);
}

#[test]
fn test_txn_id_from_blob_first() {
    let outcome = resolve(ActivityResult {
        result_code: RESULT_OK,
        response: "txnId=BLOB-ID".to_string(),
        txn_id: "EXTRA-ID".to_string(),
        approval_ref_no: "APPROVAL".to_string(),
        ..Default::default()
    });
    assert_eq!(outcome.txn_id, "BLOB-ID");
}

#[test]
fn test_txn_id_fallback_chain() {
    // No blob id -> extra txnId
    let outcome = resolve(ActivityResult {
        result_code: RESULT_OK,
        txn_id: "EXTRA-ID".to_string(),
        approval_ref_no: "APPROVAL".to_string(),
        ..Default::default()
    });
    assert_eq!(outcome.txn_id, "EXTRA-ID");

    // No txnId anywhere -> extra approval reference
    let outcome = resolve(ActivityResult {
        result_code: RESULT_OK,
        approval_ref_no: "APPROVAL".to_string(),
        ..Default::default()
    });
    assert_eq!(outcome.txn_id, "APPROVAL");

    // Approval reference only inside the blob
    let outcome = resolve(ActivityResult {
        result_code: RESULT_OK,
        response: "ApprovalRefNo=BLOB-APPROVAL".to_string(),
        ..Default::default()
    });
    assert_eq!(outcome.txn_id, "BLOB-APPROVAL");

    // Nothing at all
    let outcome = resolve(result(RESULT_OK, "", ""));
    assert_eq!(outcome.txn_id, "");
}

#[test]
fn test_malformed_pairs_do_not_poison_classification() {
    let outcome = resolve(result(
        1,
        "garbage&Status=SUCCESS&a=b=c&txnId=TXN5",
        "",
    ));
    assert_eq!(outcome.status, PaymentStatus::Success);
    assert_eq!(outcome.txn_id, "TXN5");
}

#[test]
fn test_duplicate_blob_keys_last_one_wins() {
    let outcome = resolve(result(1, "Status=FAILURE&Status=SUCCESS", ""));
    assert_eq!(outcome.status, PaymentStatus::Success);
}

#[test]
fn test_outcome_preserves_raw_payload() {
    let outcome = resolve(ActivityResult {
        result_code: 7,
        response: "foo=bar".to_string(),
        status: "weird".to_string(),
        ..Default::default()
    });

    assert_eq!(outcome.status, PaymentStatus::Unknown);
    assert_eq!(outcome.raw_response, "foo=bar");
    assert_eq!(outcome.raw_status, "weird");
    assert_eq!(outcome.result_code, 7);
}

#[test]
fn test_outcome_serializes_with_lowercase_status() {
    let outcome = resolve(result(RESULT_OK, "txnId=TXN1", ""));
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["txn_id"], "TXN1");
}
