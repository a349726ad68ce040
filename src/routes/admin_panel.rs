use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::app::AppState;
use crate::domain::{MAX_MEMBERS, MIN_MEMBERS};
use crate::error::error_chain_fmt;
use crate::groups::list_groups;

#[derive(Template)]
#[template(path = "index.html")]
struct AdminPanelTemplate {
    groups: BTreeMap<String, Vec<String>>,
    min_members: usize,
    max_members: usize,
}

#[derive(thiserror::Error)]
pub enum AdminPanelError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for AdminPanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for AdminPanelError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "Error loading admin panel");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Something went wrong!" })),
        )
            .into_response()
    }
}

#[tracing::instrument(name = "Render admin panel", skip(state))]
pub async fn admin_panel(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AdminPanelError> {
    let groups = list_groups(state.store.as_ref()).await?;
    let page = AdminPanelTemplate {
        groups,
        min_members: MIN_MEMBERS,
        max_members: MAX_MEMBERS,
    }
    .render()
    .context("Failed to render the admin panel template")?;

    Ok(Html(page))
}
