// POST /api/analyze: summarize a transcript and score its sentiment.
//
// Returns 200 with the DebateReport on success.
// Returns 422 with a warning if the transcript is blank; no backend is called.
// Returns 502 if the summarizer or sentiment scorer fails.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::pipeline::{analyze_transcript, AnalysisOutcome};
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let outcome =
        analyze_transcript(&request.text, state.summarizer.as_ref(), state.scorer.as_ref()).await;

    match outcome {
        Ok(AnalysisOutcome::Complete(report)) => (StatusCode::OK, Json(report)).into_response(),
        Ok(AnalysisOutcome::NeedsInput { warning }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "warning": warning })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %format!("{e:#}"), "Transcript analysis failed");
            api_error(StatusCode::BAD_GATEWAY, &format!("{e:#}"))
        }
    }
}
