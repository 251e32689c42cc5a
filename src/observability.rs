//! Observability stubs (metrics, tracing)

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    payments_started: AtomicU64,
    launch_failures: AtomicU64,
    responses_delivered: AtomicU64,
    responses_orphaned: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payment_started(&self) {
        self.payments_started.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "payments_started", "Metric incremented");
    }

    pub fn launch_failed(&self) {
        self.launch_failures.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "launch_failures", "Metric incremented");
    }

    pub fn response_delivered(&self) {
        self.responses_delivered.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "responses_delivered", "Metric incremented");
    }

    pub fn response_orphaned(&self) {
        self.responses_orphaned.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "responses_orphaned", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            payments_started: self.payments_started.load(Ordering::Relaxed),
            launch_failures: self.launch_failures.load(Ordering::Relaxed),
            responses_delivered: self.responses_delivered.load(Ordering::Relaxed),
            responses_orphaned: self.responses_orphaned.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub payments_started: u64,
    pub launch_failures: u64,
    pub responses_delivered: u64,
    pub responses_orphaned: u64,
}
