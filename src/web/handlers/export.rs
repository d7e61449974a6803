// POST /api/export: download a summary as a plain-text file.
//
// The dashboard posts back the summary it is showing; the response carries
// a Content-Disposition header so the browser saves it as debate_summary.txt.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::output::{summary_file_contents, SUMMARY_FILE_NAME};
use crate::web::api_error;

#[derive(Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub summary: String,
}

pub async fn export_summary(Json(request): Json<ExportRequest>) -> Response {
    if request.summary.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Nothing to export: summary is empty");
    }

    let disposition = format!("attachment; filename=\"{SUMMARY_FILE_NAME}\"");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        summary_file_contents(&request.summary),
    )
        .into_response()
}
