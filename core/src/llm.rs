//! Upstream chat-completion client.
//!
//! Everything that talks to the hosted model goes through the [`ChatApi`]
//! seam so the services can be exercised against a scripted stand-in.

mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use thiserror::Error;

/// One chat-completion round trip: a fixed system instruction plus the user
/// text, with per-task sampling parameters.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream rejected the API key")]
    Auth,
    #[error("upstream rate limit hit")]
    RateLimited,
    #[error("upstream service fault (status {0})")]
    ServiceFault(u16),
    #[error("upstream returned no content")]
    MissingContent,
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected upstream response (status {status}): {body}")]
    Unexpected { status: u16, body: String },
}

#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Issue one completion and return the generated text.
    async fn complete(&self, req: ChatRequest) -> Result<String, UpstreamError>;
}
