//! Reply backends.
//!
//! The front-end talks to a `ReplyBackend` and does not care whether the
//! reply comes from the local rule engine or a remote service.
//!
//! ## Components
//! - `rules`: the built-in rule engine (default, infallible)
//! - `http`: remote POST endpoint speaking `{"prompt"}` / `{"reply"}` JSON

use crate::error::AppError;
use async_trait::async_trait;

pub mod http;
pub mod rules;

pub use http::HttpBackend;
pub use rules::RuleBackend;

/// Defines the public interface for a reply backend.
///
/// This trait abstracts the reply source, allowing the local rule engine and
/// a remote HTTP service to be used interchangeably.
#[async_trait]
pub trait ReplyBackend: Send + Sync + 'static {
    /// Generates a reply for one user prompt.
    ///
    /// A failure here means the caller should show a generic fallback line
    /// instead of a reply.
    async fn generate_reply(&self, prompt: &str) -> Result<String, AppError>;
}
