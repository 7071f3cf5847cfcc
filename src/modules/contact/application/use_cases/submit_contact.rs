use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::email::application::ports::outgoing::{EmailSender, OutgoingEmail};
use crate::shared::validation::{is_valid_email, sanitize_input};

/// Mailbox that receives contact submissions.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub recipient: String,
}

impl ContactConfig {
    /// `CONTACT_EMAIL`, falling back to `EMAIL_FROM`.
    pub fn from_env() -> Self {
        let recipient = std::env::var("CONTACT_EMAIL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| std::env::var("EMAIL_FROM").ok())
            .expect("CONTACT_EMAIL or EMAIL_FROM must be set");

        Self { recipient }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactInput {
    #[schema(example = "Jane Doe")]
    #[serde(default)]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    #[serde(default)]
    pub email: Option<String>,
    #[schema(example = "I'd like to talk about a project.")]
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactSent {
    #[schema(example = true)]
    pub sent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Failed to send message: {0}")]
    SendFailed(String),
}

struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactInput {
    fn validate(self) -> Result<ContactMessage, SubmitContactError> {
        let field = |value: Option<String>| {
            value
                .map(|v| sanitize_input(&v))
                .filter(|v| !v.is_empty())
        };

        let name = field(self.name);
        let email = field(self.email);
        let message = field(self.message);

        let missing: Vec<&'static str> = [
            ("name", name.is_none()),
            ("email", email.is_none()),
            ("message", message.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, is_missing)| is_missing.then_some(key))
        .collect();

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(SubmitContactError::MissingFields(missing));
        };

        if !is_valid_email(&email) {
            return Err(SubmitContactError::InvalidEmail);
        }

        Ok(ContactMessage {
            name,
            email,
            message,
        })
    }
}

#[async_trait]
pub trait ISubmitContactUseCase: Send + Sync {
    async fn execute(&self, input: ContactInput) -> Result<ContactSent, SubmitContactError>;
}

pub struct SubmitContactUseCase {
    sender: Arc<dyn EmailSender>,
    config: ContactConfig,
}

impl SubmitContactUseCase {
    pub fn new(sender: Arc<dyn EmailSender>, config: ContactConfig) -> Self {
        Self { sender, config }
    }
}

#[async_trait]
impl ISubmitContactUseCase for SubmitContactUseCase {
    async fn execute(&self, input: ContactInput) -> Result<ContactSent, SubmitContactError> {
        let contact = input.validate()?;

        let email = OutgoingEmail {
            to: self.config.recipient.clone(),
            reply_to: Some(contact.email.clone()),
            subject: format!("New message from {}", contact.name),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
                contact.name, contact.email, contact.message
            ),
        };

        self.sender.send_email(email).await.map_err(|e| {
            tracing::error!(error = %e, "Contact message could not be sent");
            SubmitContactError::SendFailed(e.to_string())
        })?;

        tracing::info!("Contact message relayed");
        Ok(ContactSent { sent: true })
    }
}
