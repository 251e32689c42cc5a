use clap::{Args, Parser, Subcommand};

use upilink::intent::request::PaymentRequest;
use upilink::response::ActivityResult;

#[derive(Parser, Debug)]
#[command(name = "upilink")]
#[command(about = "UPI deep-link intent bridge", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a payment URI and launch the OS view intent
    Pay(PayArgs),
    /// Print the payment URI without launching anything
    Uri(PayArgs),
    /// Normalize a raw UPI response into a payment outcome
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
pub struct PayArgs {
    /// Payee virtual payment address (pa)
    #[arg(long)]
    pub payee: String,

    /// Payee display name (pn)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Amount as a decimal string (am); passed through untouched
    #[arg(long)]
    pub amount: String,

    /// Currency code (cu); defaults to the configured currency
    #[arg(long)]
    pub currency: Option<String>,

    /// Transaction note (tn)
    #[arg(long, default_value = "")]
    pub note: String,

    /// Transaction reference (tr); generated when omitted
    #[arg(long)]
    pub reference: Option<String>,

    /// Target application package; restricts intent resolution
    #[arg(long)]
    pub app: Option<String>,

    /// After launching, read one raw response line from stdin and classify it
    #[arg(long)]
    pub wait: bool,
}

impl PayArgs {
    pub fn to_request(&self) -> PaymentRequest {
        PaymentRequest {
            payee_address: self.payee.clone(),
            payee_name: self.name.clone(),
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            note: self.note.clone(),
            reference: self.reference.clone().unwrap_or_default(),
            target_app: self.app.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Raw ampersand-delimited response blob
    #[arg(long, default_value = "")]
    pub response: String,

    /// Top-level Status extra
    #[arg(long, default_value = "")]
    pub status: String,

    /// Top-level txnId extra
    #[arg(long, default_value = "")]
    pub txn_id: String,

    /// Top-level txnRef extra
    #[arg(long, default_value = "")]
    pub txn_ref: String,

    /// Top-level ApprovalRefNo extra
    #[arg(long, default_value = "")]
    pub approval_ref: String,

    /// Platform result code (-1 ok, 0 cancelled; default is neither)
    #[arg(long, default_value_t = 1)]
    pub result_code: i32,
}

impl ClassifyArgs {
    pub fn to_activity_result(self) -> ActivityResult {
        ActivityResult {
            result_code: self.result_code,
            response: self.response,
            status: self.status,
            txn_id: self.txn_id,
            txn_ref: self.txn_ref,
            approval_ref_no: self.approval_ref,
        }
    }
}
