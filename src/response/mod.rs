//! Response normalization
//!
//! The handler application returns one opaque callback payload: an OS
//! result code plus free-form string extras, including an
//! ampersand-delimited `response` blob. This module parses the blob and
//! applies the fixed-priority fallback chains that turn the payload into a
//! normalized [`PaymentOutcome`].

mod classify;
mod parse;
mod types;

pub use classify::{classify, resolve, transaction_id, transaction_reference};
pub use parse::parse_response_blob;
pub use types::{ActivityResult, PaymentOutcome, PaymentStatus, RESULT_CANCELED, RESULT_OK};
