//! Grammar correction: one upstream call for the corrected text, a second
//! one for the improvement notes shown next to it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::llm::{ChatApi, ChatRequest};

/// Character cap on correction input.
pub const MAX_INPUT_CHARS: usize = 5000;

const MAX_SUGGESTIONS: usize = 5;

const CORRECT_SYSTEM: &str = "You are an expert grammar correction assistant. Your task is to:
1. Correct all grammatical errors in the provided text
2. Fix spelling mistakes
3. Improve sentence structure and clarity
4. Maintain the original meaning and tone
5. Return ONLY the corrected text without explanations

If the text is already perfect, return it unchanged.";

const SUGGEST_SYSTEM: &str = "You are a writing coach. Compare the original and corrected text and provide 3-5 brief, specific suggestions about what was improved. Format each suggestion as a short sentence. Focus on the most important changes.";

const ALREADY_CORRECT_NOTE: &str = "Your text is already grammatically correct!";
const IMPROVED_NOTE: &str = "Text has been improved for clarity and correctness.";
const CORRECTED_NOTE: &str = "Text has been corrected for grammar and clarity.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CorrectionResult {
    fn ok(corrected_text: String, suggestions: Vec<String>) -> Self {
        Self {
            success: true,
            corrected_text: Some(corrected_text),
            suggestions: Some(suggestions),
            error: None,
        }
    }

    fn err(err: &ServiceError) -> Self {
        Self {
            success: false,
            corrected_text: None,
            suggestions: None,
            error: Some(err.to_string()),
        }
    }
}

/// The correction service. Stateless; `upstream` is `None` when no API key
/// is configured, which every call reports as a configuration error before
/// touching the network.
#[derive(Clone)]
pub struct Corrector {
    upstream: Option<Arc<dyn ChatApi>>,
    max_chars: usize,
}

impl Corrector {
    pub fn new(upstream: Option<Arc<dyn ChatApi>>) -> Self {
        Self {
            upstream,
            max_chars: MAX_INPUT_CHARS,
        }
    }

    /// Correct grammar/spelling/clarity and attach up to five improvement
    /// notes. Never fails past this boundary: every error becomes a
    /// user-facing message in the result payload.
    pub async fn correct_grammar(&self, text: &str) -> CorrectionResult {
        match self.run(text).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "grammar correction failed");
                CorrectionResult::err(&err)
            }
        }
    }

    async fn run(&self, text: &str) -> Result<CorrectionResult, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::EmptyInput("correct"));
        }
        if text.chars().count() > self.max_chars {
            return Err(ServiceError::TooLong(self.max_chars));
        }
        let upstream = self.upstream.as_ref().ok_or(ServiceError::MissingApiKey)?;

        let corrected = upstream
            .complete(ChatRequest {
                system: CORRECT_SYSTEM.into(),
                user: text.into(),
                // Low temperature for consistent corrections.
                temperature: 0.3,
                max_tokens: 2000,
            })
            .await
            .map_err(|err| ServiceError::from_upstream(err, "generate correction"))?;
        let corrected = corrected.trim().to_owned();

        let suggestions = self.suggestions_for(upstream.as_ref(), text, &corrected).await;
        Ok(CorrectionResult::ok(corrected, suggestions))
    }

    /// Improvement notes via a second model call comparing the two texts.
    /// Identical texts short-circuit to a fixed note; a failed or empty
    /// suggestion call degrades to a generic note instead of failing the
    /// whole correction.
    async fn suggestions_for(
        &self,
        upstream: &dyn ChatApi,
        original: &str,
        corrected: &str,
    ) -> Vec<String> {
        if original.trim() == corrected {
            return vec![ALREADY_CORRECT_NOTE.to_owned()];
        }

        let user = format!(
            "Original: {original}\n\nCorrected: {corrected}\n\nProvide specific suggestions about what was improved."
        );
        match upstream
            .complete(ChatRequest {
                system: SUGGEST_SYSTEM.into(),
                user,
                temperature: 0.5,
                max_tokens: 300,
            })
            .await
        {
            Ok(raw) => {
                let suggestions = parse_suggestions(&raw);
                if suggestions.is_empty() {
                    vec![IMPROVED_NOTE.to_owned()]
                } else {
                    suggestions
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "suggestion call failed");
                vec![CORRECTED_NOTE.to_owned()]
            }
        }
    }
}

/// Split the model output into notes: one per line, bullet punctuation
/// stripped, blanks dropped, capped at [`MAX_SUGGESTIONS`].
fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim().trim_start_matches(['-', '•', '*']).trim_start())
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .take(MAX_SUGGESTIONS)
        .collect()
}
