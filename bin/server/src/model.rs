use serde::{Deserialize, Serialize};

use textpolish_core::{SummaryLength, Tone};

#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToneRequest {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub length: SummaryLength,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpandRequest {
    pub text: String,
}
