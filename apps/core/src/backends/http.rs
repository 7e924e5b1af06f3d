use crate::backends::ReplyBackend;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Request body sent to the remote reply endpoint.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    prompt: &'a str,
}

/// Expected response body from the remote reply endpoint.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

/// Remote reply backend: POSTs the prompt as JSON and expects a JSON reply.
///
/// Any non-success status or unusable payload surfaces as an error; the
/// caller is expected to show a generic fallback line. No retries.
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Builds a backend for `endpoint` with a per-request timeout.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ReplyBackend for HttpBackend {
    async fn generate_reply(&self, prompt: &str) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ChatRequest { prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Backend(format!(
                "reply endpoint returned {}",
                status
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("malformed reply payload: {}", e)))?;

        debug!("Remote backend replied ({} chars)", body.reply.len());
        Ok(body.reply)
    }
}
