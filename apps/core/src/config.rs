//! Runtime configuration, loaded from the environment.
//!
//! Supports a `.env` file via `dotenv` (loaded in `main`). Two variables:
//! - `NOVA_BACKEND_URL`: when set, replies come from a remote HTTP backend
//!   instead of the built-in rule engine.
//! - `NOVA_REQUEST_TIMEOUT_SECS`: request timeout for that backend.

use crate::error::AppError;
use std::env;
use std::time::Duration;
use url::Url;

/// Default timeout for a single remote reply request.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote reply endpoint. `None` means the local rule engine is used.
    pub backend_url: Option<Url>,
    /// Timeout applied to each remote reply request.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// An unset `NOVA_BACKEND_URL` is fine (local rules); a set but invalid
    /// one is a configuration error and is reported rather than ignored.
    pub fn from_env() -> Result<Self, AppError> {
        let backend_url = match env::var("NOVA_BACKEND_URL") {
            Ok(raw) if !raw.trim().is_empty() => Some(Url::parse(raw.trim())?),
            _ => None,
        };

        let request_timeout = match env::var("NOVA_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!(
                        "NOVA_REQUEST_TIMEOUT_SECS must be a number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            backend_url,
            request_timeout,
        })
    }
}
