use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::app::AppState;

/// Serves the accumulated log file as a plain-text download.
pub async fn download_logs(State(state): State<Arc<AppState>>) -> Response {
    let contents = match tokio::fs::read(&state.log_file).await {
        Ok(contents) => contents,
        Err(e) => {
            tracing::error!(error = %e, path = %state.log_file.display(), "Failed to read log file");
            return StatusCode::NOT_FOUND.into_response();
        },
    };

    let file_name = state
        .log_file
        .file_name()
        .map_or_else(|| "logs.txt".into(), |name| name.to_string_lossy());
    let disposition = format!("attachment; filename=\"{file_name}\"");

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        contents,
    )
        .into_response()
}
