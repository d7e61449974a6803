// GET /api/status: which backends the dashboard is running with.
//
// Lets the page show "summaries by facebook/bart-large-cnn" in its footer
// without hardcoding the model name.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::config::SummarizerBackend;
use crate::web::AppState;

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let config = &state.config;
    // Extractive summaries don't come from a model
    let model = (config.summarizer_backend == SummarizerBackend::HuggingFace)
        .then(|| config.summary_model.clone());
    Json(serde_json::json!({
        "summarizer": state.summarizer.name(),
        "model": model,
        "summary_params": config.summary_params,
        "sentiment": state.scorer.name(),
        "lexicon_entries": state.lexicon_entries,
    }))
}
