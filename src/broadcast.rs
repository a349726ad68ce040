//! Broadcast composition: look up the group, render the body, send one
//! message to every member.

use anyhow::Context;
use pulldown_cmark::{html, Event, Options, Parser};

use crate::domain::{GroupName, MessageFormat};
use crate::email_client::EmailClient;
use crate::error::error_chain_fmt;
use crate::groups::group_members;
use crate::store::KeyValueStore;

pub struct BroadcastRequest {
    pub group_name: String,
    pub subject: String,
    pub message: String,
    pub format: MessageFormat,
}

#[derive(thiserror::Error)]
pub enum BroadcastError {
    #[error("No recipients found for group {0}")]
    NoRecipients(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for BroadcastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn render_body(message: &str, format: MessageFormat) -> String {
    match format {
        MessageFormat::Plain => message.to_owned(),
        MessageFormat::Markdown => {
            // Raw HTML in the source is shown as text, never passed through.
            let parser = Parser::new_ext(message, Options::empty()).map(|event| match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            });
            let mut rendered = String::with_capacity(message.len() * 3 / 2);
            html::push_html(&mut rendered, parser);
            rendered
        },
    }
}

/// Sends the broadcast and returns how many recipients it was addressed to.
#[tracing::instrument(
    name = "Broadcasting to a group",
    skip(store, email_client, request),
    fields(group = %request.group_name, format = ?request.format)
)]
pub async fn broadcast(
    store: &dyn KeyValueStore,
    email_client: &EmailClient,
    request: &BroadcastRequest,
) -> Result<usize, BroadcastError> {
    let Ok(name) = GroupName::parse(&request.group_name) else {
        return Err(BroadcastError::NoRecipients(request.group_name.clone()));
    };

    let recipients = group_members(store, &name)
        .await
        .context("Failed to look up group members")?
        .unwrap_or_default();
    if recipients.is_empty() {
        return Err(BroadcastError::NoRecipients(name.to_string()));
    }

    let html_content = render_body(&request.message, request.format);
    email_client
        .send_email(&recipients, &request.subject, &html_content)
        .await
        .with_context(|| format!("Failed to send broadcast to group {name}"))?;

    tracing::info!(
        recipient_count = recipients.len(),
        "Broadcast sent to group '{}'",
        name
    );
    Ok(recipients.len())
}
