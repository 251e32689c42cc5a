//! Payment URI construction
//!
//! Serializes a [`PaymentRequest`] into the `upi://pay` deep-link form that
//! handler applications resolve. All six query parameters are always
//! present, empty values included, so the wire shape is stable regardless
//! of which fields the caller filled in.

use thiserror::Error;
use url::Url;

use crate::intent::request::PaymentRequest;

pub const UPI_SCHEME: &str = "upi";
pub const UPI_AUTHORITY: &str = "pay";

#[derive(Debug, Error)]
pub enum UriError {
    #[error("failed to construct payment URI: {0}")]
    Construction(String),
}

/// Build the `upi://pay?pa=..&pn=..&am=..&cu=..&tn=..&tr=..` URI.
///
/// `default_currency` applies when the request carries no currency (or an
/// empty one). Values are query-encoded; nothing is validated.
pub fn payment_uri(request: &PaymentRequest, default_currency: &str) -> Result<Url, UriError> {
    let mut uri = Url::parse(&format!("{UPI_SCHEME}://{UPI_AUTHORITY}"))
        .map_err(|e| UriError::Construction(e.to_string()))?;

    let currency = request
        .currency
        .as_deref()
        .filter(|cu| !cu.is_empty())
        .unwrap_or(default_currency);

    uri.query_pairs_mut()
        .append_pair("pa", &request.payee_address)
        .append_pair("pn", &request.payee_name)
        .append_pair("am", &request.amount)
        .append_pair("cu", currency)
        .append_pair("tn", &request.note)
        .append_pair("tr", &request.reference);

    Ok(uri)
}
