//! Transactional email.
//!
//! [`client_from_env`] is the fail-fast factory: it refuses to build a client
//! unless `RESEND_API_KEY` is set, so callers never hold a half-usable client.
//! A fresh [`ResendClient`] is constructed on every call.

use async_trait::async_trait;
use lettre::message::Mailbox;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::EmailConfig;
use crate::error::AppError;

pub const RESEND_API_URL: &str = "https://api.resend.com";

/// A single outbound message.
#[derive(Debug, Clone, Serialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Email {
    pub fn new(from: impl Into<String>, to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            html: None,
            text: None,
        }
    }

    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html = Some(body.into());
        self
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text = Some(body.into());
        self
    }

    /// Checks the message is deliverable before it leaves the process.
    pub fn validate(&self) -> Result<(), AppError> {
        parse_mailbox("sender", &self.from)?;

        if self.to.is_empty() {
            return Err(AppError::InvalidEmail("recipient list is empty".into()));
        }
        for recipient in &self.to {
            parse_mailbox("recipient", recipient)?;
        }

        if self.html.is_none() && self.text.is_none() {
            return Err(AppError::InvalidEmail("email has no body".into()));
        }
        Ok(())
    }
}

/// Accepts `addr@host` or `Name <addr@host>`.
fn parse_mailbox(role: &str, value: &str) -> Result<Mailbox, AppError> {
    value
        .parse::<Mailbox>()
        .map_err(|err| AppError::InvalidEmail(format!("{} {:?}: {}", role, value, err)))
}

/// Provider acknowledgement for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<SentEmail, AppError>;
}

/// Client bound to a single provider API key.
#[derive(Clone)]
pub struct ResendClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl ResendClient {
    pub fn new(config: &EmailConfig) -> Self {
        Self::with_base_url(config, RESEND_API_URL)
    }

    pub fn with_base_url(config: &EmailConfig, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builds a new client from the process environment.
///
/// Fails with [`AppError::Config`] when the API key is absent.
pub fn client_from_env() -> Result<ResendClient, AppError> {
    let config = EmailConfig::from_env()?;
    Ok(ResendClient::new(&config))
}

#[async_trait]
impl Mailer for ResendClient {
    async fn send(&self, email: Email) -> Result<SentEmail, AppError> {
        email.validate()?;

        let url = format!("{}/emails", self.base_url);
        tracing::debug!(subject = %email.subject, recipients = email.to.len(), "sending email");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&email)
            .send()
            .await
            .map_err(AppError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("<unreadable body: {err}>"));
            tracing::warn!("Email provider rejected message: HTTP {}", status);
            return Err(AppError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let sent = response
            .json::<SentEmail>()
            .await
            .map_err(AppError::Parse)?;

        tracing::info!(id = %sent.id, "email accepted by provider");
        Ok(sent)
    }
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
