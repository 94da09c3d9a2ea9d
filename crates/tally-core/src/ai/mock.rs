//! Mock AI backend for testing

use async_trait::async_trait;

use crate::error::Result;

use super::AiBackend;

/// Mock backend that echoes deterministic responses
#[derive(Clone, Default)]
pub struct MockBackend;

impl MockBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AiBackend for MockBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        // Deterministic, prompt-derived output so tests can assert on it
        Ok(format!(
            "[mock] Based on your finances, here is my take. (prompt {} chars)",
            prompt.len()
        ))
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
