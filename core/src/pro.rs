//! Pro features: tone adjustment, summarization, expansion. Three stateless
//! operations, each a single upstream call with a task-specific instruction
//! template.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::llm::{ChatApi, ChatRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
    Professional,
}

impl Tone {
    fn description(self) -> &'static str {
        match self {
            Self::Formal => "formal and professional, suitable for academic or business writing",
            Self::Casual => "casual and conversational, suitable for friendly communication",
            Self::Professional => {
                "professional and polished, suitable for workplace communication"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    fn description(self) -> &'static str {
        match self {
            Self::Short => "a brief 1-2 sentence summary",
            Self::Medium => "a concise paragraph summary (3-5 sentences)",
            Self::Long => "a detailed summary (1-2 paragraphs)",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProFeatureResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProFeatureResult {
    fn from_outcome(outcome: Result<String, ServiceError>) -> Self {
        match outcome {
            Ok(result) => Self {
                success: true,
                result: Some(result),
                error: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "pro feature failed");
                Self {
                    success: false,
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

/// The three ad-gated operations. Like [`crate::Corrector`], carries the
/// configured upstream (or `None` when the credential is absent) and never
/// fails past its boundary.
#[derive(Clone)]
pub struct ProFeatures {
    upstream: Option<Arc<dyn ChatApi>>,
}

impl ProFeatures {
    pub fn new(upstream: Option<Arc<dyn ChatApi>>) -> Self {
        Self { upstream }
    }

    pub async fn adjust_tone(&self, text: &str, tone: Tone) -> ProFeatureResult {
        tracing::debug!(%tone, "adjusting tone");
        let system = format!(
            "You are a writing assistant. Rewrite the provided text to be {}. Maintain the original meaning and key information, but adjust the tone, word choice, and sentence structure accordingly. Return ONLY the rewritten text.",
            tone.description()
        );
        self.run(text, "adjust", "adjust tone", system, 0.7, 2000)
            .await
    }

    pub async fn summarize(&self, text: &str, length: SummaryLength) -> ProFeatureResult {
        tracing::debug!(%length, "summarizing");
        let system = format!(
            "You are a summarization expert. Create {} of the provided text. Capture the main points and key information. Return ONLY the summary.",
            length.description()
        );
        self.run(text, "summarize", "summarize text", system, 0.5, 1000)
            .await
    }

    pub async fn expand(&self, text: &str) -> ProFeatureResult {
        let system = "You are a writing assistant. Expand the provided text to make it more detailed, comprehensive, and engaging. Add relevant details, examples, and elaboration while maintaining the original meaning and tone. Return ONLY the expanded text.".to_owned();
        self.run(text, "expand", "expand text", system, 0.7, 2000)
            .await
    }

    /// Shared shape of all three: validate, one upstream call, trim.
    async fn run(
        &self,
        text: &str,
        verb: &'static str,
        task: &'static str,
        system: String,
        temperature: f64,
        max_tokens: u32,
    ) -> ProFeatureResult {
        let outcome = async {
            if text.trim().is_empty() {
                return Err(ServiceError::EmptyInput(verb));
            }
            let upstream = self.upstream.as_ref().ok_or(ServiceError::MissingApiKey)?;
            let result = upstream
                .complete(ChatRequest {
                    system,
                    user: text.into(),
                    temperature,
                    max_tokens,
                })
                .await
                .map_err(|err| ServiceError::from_upstream(err, task))?;
            Ok(result.trim().to_owned())
        }
        .await;
        ProFeatureResult::from_outcome(outcome)
    }
}
