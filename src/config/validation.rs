use super::models::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("launcher.program must not be empty")]
    EmptyLauncherProgram,

    #[error("payment.default_currency must not be empty")]
    EmptyDefaultCurrency,

    #[error("payment.response_timeout_secs must be positive")]
    ZeroResponseTimeout,
}

/// Validate the entire configuration
///
/// This checks the bridge's own settings only; payment request fields are
/// never validated before dispatch.
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    if config.launcher.program.is_empty() {
        return Err(ValidationError::EmptyLauncherProgram);
    }

    if config.payment.default_currency.is_empty() {
        return Err(ValidationError::EmptyDefaultCurrency);
    }

    if config.payment.response_timeout_secs == 0 {
        return Err(ValidationError::ZeroResponseTimeout);
    }

    Ok(())
}
