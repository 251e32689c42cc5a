//! OS launch seam
//!
//! The bridge does not resolve deep links itself; it hands the URI to the
//! operating system's generic view-intent mechanism. That capability sits
//! behind the [`IntentLauncher`] trait so tests can substitute a recording
//! implementation.

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};
use url::Url;

use crate::config::LauncherConfig;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to spawn launcher: {0}")]
    Spawn(String),
    #[error("launcher exited with status {0}")]
    ExitStatus(i32),
}

/// Hands a URI to the OS for handler resolution.
#[async_trait]
pub trait IntentLauncher: Send + Sync {
    /// Resolve and launch a handler for `uri`. When `target_app` is set,
    /// resolution is restricted to that application package.
    async fn view(&self, uri: &Url, target_app: Option<&str>) -> Result<(), LaunchError>;
}

/// Launcher that shells out to a configurable command.
///
/// The default configuration uses the Android activity-manager VIEW form
/// (`am start -a android.intent.action.VIEW -d <uri>`), with `-p <package>`
/// appended when a target application is requested. Desktop development
/// setups override `launcher.program` in the config.
pub struct CommandLauncher {
    config: LauncherConfig,
}

impl CommandLauncher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl IntentLauncher for CommandLauncher {
    async fn view(&self, uri: &Url, target_app: Option<&str>) -> Result<(), LaunchError> {
        let mut command = Command::new(&self.config.program);
        command.args(&self.config.view_args).arg(uri.as_str());

        if let Some(package) = target_app {
            command.arg(&self.config.package_flag).arg(package);
        }

        debug!(program = %self.config.program, uri = %uri, target_app, "Dispatching view intent");

        let status = command
            .status()
            .await
            .map_err(|e| LaunchError::Spawn(e.to_string()))?;

        if !status.success() {
            warn!(code = ?status.code(), uri = %uri, "Launcher reported failure");
            return Err(LaunchError::ExitStatus(status.code().unwrap_or(-1)));
        }

        Ok(())
    }
}
