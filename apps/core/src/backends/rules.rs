use crate::backends::ReplyBackend;
use crate::brain::ReplyEngine;
use crate::error::AppError;
use async_trait::async_trait;

/// The built-in backend: wraps the rule engine. Never fails.
pub struct RuleBackend {
    engine: ReplyEngine,
}

impl Default for RuleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBackend {
    pub fn new() -> Self {
        Self {
            engine: ReplyEngine::new(),
        }
    }
}

#[async_trait]
impl ReplyBackend for RuleBackend {
    async fn generate_reply(&self, prompt: &str) -> Result<String, AppError> {
        Ok(self.engine.generate(prompt))
    }
}
