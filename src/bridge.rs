//! Request/response orchestration
//!
//! `UpiBridge` ties the pieces together:
//! 1. Application calls `bridge.start_payment(request)`
//! 2. Bridge applies config defaults, builds the URI, launches the handler
//! 3. One pending-response slot is registered (a oneshot sender)
//! 4. The platform side calls `bridge.complete(result)` exactly once
//! 5. The caller awaits `PendingPayment::outcome()` for the normalized result
//!
//! There is exactly one in-flight payment. Starting a new payment replaces
//! the pending slot; the superseded waiter resolves with an error instead
//! of hanging.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, oneshot};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::PaymentConfig;
use crate::intent::launcher::{IntentLauncher, LaunchError};
use crate::intent::request::PaymentRequest;
use crate::intent::uri::{UriError, payment_uri};
use crate::observability::Metrics;
use crate::response::{ActivityResult, PaymentOutcome, resolve};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("payment URI construction failed: {0}")]
    Uri(#[from] UriError),

    #[error("intent launch failed: {0}")]
    Launch(#[from] LaunchError),

    #[error("payment superseded by a newer request")]
    Superseded,

    #[error("timed out waiting for payment response")]
    Timeout,
}

/// Bridge between the application layer and the OS deep-link capability.
pub struct UpiBridge {
    config: PaymentConfig,
    launcher: Arc<dyn IntentLauncher>,
    metrics: Arc<Metrics>,
    pending: Mutex<Option<oneshot::Sender<ActivityResult>>>,
}

/// Handle for one launched payment, resolved by the single callback.
pub struct PendingPayment {
    pub uri: Url,
    pub reference: String,
    receiver: oneshot::Receiver<ActivityResult>,
}

impl UpiBridge {
    pub fn new(config: PaymentConfig, launcher: Arc<dyn IntentLauncher>, metrics: Arc<Metrics>) -> Self {
        Self {
            config,
            launcher,
            metrics,
            pending: Mutex::new(None),
        }
    }

    /// Build the payment URI, launch the handler and register the pending slot.
    ///
    /// A launch failure clears the slot and surfaces immediately; no
    /// callback will ever arrive for a payment that never launched.
    pub async fn start_payment(&self, request: PaymentRequest) -> Result<PendingPayment, BridgeError> {
        let request = request.ensure_reference();

        let target_app = request
            .target_app
            .clone()
            .or_else(|| self.config.default_app.clone())
            .filter(|app| !app.is_empty());

        let uri = payment_uri(&request, &self.config.default_currency)?;

        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.pending.lock().await;
            if pending.replace(tx).is_some() {
                debug!("Superseding pending payment");
            }
        }

        if let Err(err) = self.launcher.view(&uri, target_app.as_deref()).await {
            self.pending.lock().await.take();
            self.metrics.launch_failed();
            return Err(err.into());
        }

        self.metrics.payment_started();
        info!(reference = %request.reference, uri = %uri, "Payment intent launched");

        Ok(PendingPayment {
            uri,
            reference: request.reference,
            receiver: rx,
        })
    }

    /// Deliver the one callback payload to the pending waiter.
    ///
    /// Returns whether a waiter received it; a response with no pending
    /// payment is logged and dropped.
    pub async fn complete(&self, result: ActivityResult) -> bool {
        let sender = self.pending.lock().await.take();

        match sender {
            Some(tx) => match tx.send(result) {
                Ok(()) => {
                    self.metrics.response_delivered();
                    true
                }
                Err(_) => {
                    warn!("Pending payment waiter dropped before delivery");
                    self.metrics.response_orphaned();
                    false
                }
            },
            None => {
                warn!("Payment response arrived with no pending payment");
                self.metrics.response_orphaned();
                false
            }
        }
    }
}

impl PendingPayment {
    /// Await the callback and resolve it into a normalized outcome.
    pub async fn outcome(self) -> Result<PaymentOutcome, BridgeError> {
        let result = self.receiver.await.map_err(|_| BridgeError::Superseded)?;
        Ok(resolve(result))
    }

    /// Like [`outcome`](Self::outcome), bounded by `timeout`.
    pub async fn outcome_timeout(
        self,
        timeout: std::time::Duration,
    ) -> Result<PaymentOutcome, BridgeError> {
        tokio::time::timeout(timeout, self.outcome())
            .await
            .map_err(|_| BridgeError::Timeout)?
    }
}
