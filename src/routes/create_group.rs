use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::app::AppState;
use crate::groups::{create_or_replace_group, CreateGroupError};

#[derive(Deserialize)]
pub struct FormData {
    name: String,
    emails: String,
}

/// Always lands back on the admin panel; the outcome only shows up in the log.
#[tracing::instrument(name = "Create group", skip(state, form), fields(group = %form.name))]
pub async fn create_group(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormData>,
) -> Redirect {
    match create_or_replace_group(state.store.as_ref(), &form.name, &form.emails).await {
        Ok(_) => {},
        Err(e @ CreateGroupError::ValidationError(_)) => {
            tracing::warn!(error = %e, "Rejected group");
        },
        Err(e) => {
            tracing::error!(error = ?e, "Error creating group");
        },
    }

    Redirect::to("/")
}
