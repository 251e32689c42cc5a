//! upilink bridges an application layer to the operating system's deep-link
//! mechanism for UPI payments: build a `upi://pay` URI, hand it to the OS
//! view-intent launcher, and normalize the single asynchronous response
//! payload into a payment outcome.

pub mod bridge;
pub mod config;
pub mod intent;
pub mod observability;
pub mod response;
