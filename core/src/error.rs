use thiserror::Error;

use crate::llm::UpstreamError;

/// Everything a service operation can fail with. The `Display` strings are
/// the user-facing messages rendered verbatim by the front-end, so they stay
/// stable and actionable rather than technical.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Empty or whitespace-only input. Carries the operation verb so the
    /// message reads naturally ("... to correct.", "... to summarize.").
    #[error("Please enter some text to {0}.")]
    EmptyInput(&'static str),
    #[error("Text is too long. Please limit to {0} characters.")]
    TooLong(usize),
    #[error(
        "OpenAI API key is not configured. Please add OPENAI_API_KEY to your environment."
    )]
    MissingApiKey,
    /// Upstream answered but without usable content.
    #[error("Failed to {0}. Please try again.")]
    NoContent(&'static str),
    #[error("Invalid API key. Please check your OpenAI API key configuration.")]
    Auth,
    #[error("Rate limit exceeded. Please try again in a moment.")]
    Throttled,
    #[error("OpenAI service error. Please try again later.")]
    UpstreamUnavailable,
    #[error("An unexpected error occurred. Please try again.")]
    Unknown,
}

impl ServiceError {
    /// Fold an upstream failure into the user-facing taxonomy. `task` names
    /// what the operation was doing, for the missing-content message.
    pub(crate) fn from_upstream(err: UpstreamError, task: &'static str) -> Self {
        match err {
            UpstreamError::Auth => Self::Auth,
            UpstreamError::RateLimited => Self::Throttled,
            UpstreamError::ServiceFault(_) => Self::UpstreamUnavailable,
            UpstreamError::MissingContent => Self::NoContent(task),
            UpstreamError::Transport(_) | UpstreamError::Unexpected { .. } => Self::Unknown,
        }
    }
}
