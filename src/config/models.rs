use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub launcher: LauncherConfig,
}

/// Payment defaults applied to requests before dispatch
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Currency code used when a request carries none
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Target application package used when a request carries none
    pub default_app: Option<String>,
    /// Upper bound on waiting for the response callback
    #[serde(default = "default_response_timeout_secs")]
    pub response_timeout_secs: u64,
}

impl PaymentConfig {
    pub fn response_timeout(&self) -> Duration {
        Duration::from_secs(self.response_timeout_secs)
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            default_app: None,
            response_timeout_secs: default_response_timeout_secs(),
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_response_timeout_secs() -> u64 {
    300
}

/// Launcher command configuration
///
/// The defaults spell the Android activity-manager VIEW invocation; desktop
/// setups typically override `program` with `xdg-open` or `open` and clear
/// `view_args`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LauncherConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the URI
    #[serde(default = "default_view_args")]
    pub view_args: Vec<String>,
    /// Flag preceding the target application package
    #[serde(default = "default_package_flag")]
    pub package_flag: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            view_args: default_view_args(),
            package_flag: default_package_flag(),
        }
    }
}

fn default_program() -> String {
    "am".to_string()
}

fn default_view_args() -> Vec<String> {
    ["start", "-a", "android.intent.action.VIEW", "-d"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_package_flag() -> String {
    "-p".to_string()
}
