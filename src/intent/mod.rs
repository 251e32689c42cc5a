pub mod launcher;
pub mod request;
pub mod uri;

pub use launcher::{CommandLauncher, IntentLauncher, LaunchError};
pub use request::PaymentRequest;
pub use uri::{UriError, payment_uri};
