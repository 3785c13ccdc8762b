pub mod correct;
pub mod error;
pub mod gate;
pub mod llm;
pub mod pro;

pub use correct::{CorrectionResult, Corrector, MAX_INPUT_CHARS};
pub use error::ServiceError;
pub use gate::{AdGate, GateAction, GateState};
pub use llm::{ChatApi, ChatRequest, OpenAiClient, UpstreamError};
pub use pro::{ProFeatureResult, ProFeatures, SummaryLength, Tone};
