use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::app::AppState;
use crate::broadcast::{broadcast, BroadcastError, BroadcastRequest};

#[derive(Deserialize)]
pub struct FormData {
    group_name: String,
    subject: String,
    message: String,
    format_type: String,
}

impl From<FormData> for BroadcastRequest {
    fn from(form: FormData) -> Self {
        Self {
            format: form.format_type.as_str().into(),
            group_name: form.group_name,
            subject: form.subject,
            message: form.message,
        }
    }
}

/// Always lands back on the admin panel; the outcome only shows up in the log.
#[tracing::instrument(name = "Broadcast email", skip(state, form), fields(group = %form.group_name))]
pub async fn broadcast_email(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FormData>,
) -> Redirect {
    let request = BroadcastRequest::from(form);
    match broadcast(state.store.as_ref(), &state.email_client, &request).await {
        Ok(_) => {},
        Err(e @ BroadcastError::NoRecipients(_)) => {
            tracing::warn!(error = %e, "Broadcast failed");
        },
        Err(e) => {
            tracing::error!(error = ?e, "Error sending broadcast");
        },
    }

    Redirect::to("/")
}
