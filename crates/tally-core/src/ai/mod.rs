//! Pluggable local AI backend abstraction
//!
//! All backends run locally (no cloud APIs). The chat assistant answers
//! free-text questions about the user's finances; the caller supplies the
//! current summary as context.
//!
//! # Configuration
//!
//! Environment variables:
//! - `OLLAMA_HOST`: Ollama server URL (required to enable the assistant)
//! - `OLLAMA_MODEL`: Model name (default: llama3.2)

mod mock;
mod ollama;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::FinancialSummary;
use crate::money::format_dollars;

/// Trait defining the interface for all AI backends
#[async_trait]
pub trait AiBackend: Send + Sync {
    /// Generate a free-text response to a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the backend is available
    async fn health_check(&self) -> bool;

    /// Get the model name (for logging)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete AI client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum AiClient {
    /// Ollama backend (HTTP API)
    Ollama(OllamaBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl AiClient {
    /// Create an AI client from environment variables
    ///
    /// Returns None if `OLLAMA_HOST` is not set.
    pub fn from_env() -> Option<Self> {
        OllamaBackend::from_env().map(AiClient::Ollama)
    }

    /// Create an Ollama backend directly
    pub fn ollama(host: &str, model: &str) -> Self {
        AiClient::Ollama(OllamaBackend::new(host, model))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        AiClient::Mock(MockBackend::new())
    }

    /// Answer a finance question with the current summary as context
    pub async fn chat(&self, message: &str, summary: &FinancialSummary) -> Result<String> {
        let prompt = build_chat_prompt(message, summary);
        self.generate(&prompt).await
    }
}

#[async_trait]
impl AiBackend for AiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        match self {
            AiClient::Ollama(b) => b.generate(prompt).await,
            AiClient::Mock(b) => b.generate(prompt).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            AiClient::Ollama(b) => b.health_check().await,
            AiClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            AiClient::Ollama(b) => b.model(),
            AiClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            AiClient::Ollama(b) => b.host(),
            AiClient::Mock(b) => b.host(),
        }
    }
}

/// Build the assistant prompt: a short system preamble, the month's numbers,
/// and the user's question.
fn build_chat_prompt(message: &str, summary: &FinancialSummary) -> String {
    let mut context = format!(
        "You are a personal finance assistant. Be concise and practical.\n\
         Current financial snapshot for {}:\n\
         - Income: {}\n\
         - Expenses: {}\n\
         - Net: {}\n\
         - Savings rate: {:.1}%\n",
        summary.period,
        format_dollars(summary.total_income_cents),
        format_dollars(summary.total_expenses_cents),
        format_dollars(summary.net_income_cents),
        summary.savings_rate,
    );

    if !summary.expenses_by_category.is_empty() {
        context.push_str("Spending by category:\n");
        for (category, cents) in &summary.expenses_by_category {
            context.push_str(&format!("- {}: {}\n", category, format_dollars(*cents)));
        }
    }

    format!("{}\nUser question: {}\nAnswer:", context, message)
}
