use std::sync::Arc;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid email address")]
    InvalidAddress(#[from] lettre::address::AddressError),

    #[error("Failed to build the email")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP delivery failed")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Hands a finished message to a mail relay.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, message: Message) -> Result<(), MailError>;
}

#[async_trait]
impl MailTransport for AsyncSmtpTransport<Tokio1Executor> {
    async fn deliver(&self, message: Message) -> Result<(), MailError> {
        self.send(message).await?;
        Ok(())
    }
}

pub struct EmailClient {
    transport: Arc<dyn MailTransport>,
    sender: Mailbox,
}

impl EmailClient {
    pub fn new(transport: Arc<dyn MailTransport>, sender: Mailbox) -> Self {
        Self { transport, sender }
    }

    /// Sends one message addressed to every recipient at once. All addresses
    /// share a single `To` header and are visible to each other.
    #[tracing::instrument(
        name = "Sending email",
        skip(self, recipients, html_content),
        fields(recipient_count = recipients.len())
    )]
    pub async fn send_email(
        &self,
        recipients: &[String],
        subject: &str,
        html_content: &str,
    ) -> Result<(), MailError> {
        let message = self.compose(recipients, subject, html_content)?;
        self.transport.deliver(message).await
    }

    fn compose(
        &self,
        recipients: &[String],
        subject: &str,
        html_content: &str,
    ) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(self.sender.clone())
            .subject(subject);
        for recipient in recipients {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }

        let body = MultiPart::mixed().singlepart(SinglePart::html(html_content.to_owned()));
        Ok(builder.multipart(body)?)
    }
}
