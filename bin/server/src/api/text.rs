use crate::api::state::AppState;
use crate::model::{CorrectRequest, ExpandRequest, SummarizeRequest, ToneRequest};

use axum::{
    Router,
    extract::{Json, State},
    routing::post,
};
use textpolish_core::{CorrectionResult, ProFeatureResult};
use tracing::instrument;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/correct", post(correct_handler))
        .route("/api/tone", post(tone_handler))
        .route("/api/summarize", post(summarize_handler))
        .route("/api/expand", post(expand_handler))
}

/// Correct grammar and spelling, with improvement notes.
#[instrument(skip(state, req))]
async fn correct_handler(
    State(state): State<AppState>,
    Json(req): Json<CorrectRequest>,
) -> Json<CorrectionResult> {
    Json(state.corrector.correct_grammar(&req.text).await)
}

/// Rewrite text in the requested tone.
#[instrument(skip(state, req))]
async fn tone_handler(
    State(state): State<AppState>,
    Json(req): Json<ToneRequest>,
) -> Json<ProFeatureResult> {
    Json(state.pro.adjust_tone(&req.text, req.tone).await)
}

/// Summarize text at the requested length.
#[instrument(skip(state, req))]
async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Json<ProFeatureResult> {
    Json(state.pro.summarize(&req.text, req.length).await)
}

/// Expand text with more detail.
#[instrument(skip(state, req))]
async fn expand_handler(
    State(state): State<AppState>,
    Json(req): Json<ExpandRequest>,
) -> Json<ProFeatureResult> {
    Json(state.pro.expand(&req.text).await)
}
