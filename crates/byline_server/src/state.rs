//! Shared per-process application state.

use crate::config::ServerConfig;
use byline_core::EmailPolicy;

/// Immutable state cloned into each worker.
///
/// No connection lives here: every request opens its own SQLite
/// connection so the durable store stays the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub email_policy: EmailPolicy,
}

impl AppState {
    /// Builds state from configuration, compiling the email policy.
    pub fn from_config(config: ServerConfig) -> Result<Self, String> {
        let email_policy = EmailPolicy::new(&config.email_domain).map_err(|err| {
            format!(
                "invalid email domain `{}`: {err}",
                config.email_domain
            )
        })?;

        Ok(Self {
            config,
            email_policy,
        })
    }
}
