use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A structured payment request, prior to URI serialization.
///
/// Field values are passed through to the handler application untouched;
/// the bridge does not validate payee, amount or currency before dispatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Payee virtual payment address (`pa` query parameter)
    pub payee_address: String,
    /// Payee display name (`pn`)
    #[serde(default)]
    pub payee_name: String,
    /// Amount as a decimal string (`am`)
    pub amount: String,
    /// Currency code (`cu`); the configured default applies when absent
    #[serde(default)]
    pub currency: Option<String>,
    /// Transaction note (`tn`)
    #[serde(default)]
    pub note: String,
    /// Transaction reference (`tr`)
    #[serde(default)]
    pub reference: String,
    /// Target application package; restricts intent resolution when set
    #[serde(default)]
    pub target_app: Option<String>,
}

impl PaymentRequest {
    /// Fill an empty transaction reference with a generated one.
    pub fn ensure_reference(mut self) -> Self {
        if self.reference.is_empty() {
            self.reference = Uuid::new_v4().simple().to_string();
        }
        self
    }
}
