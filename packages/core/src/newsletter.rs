//! Scheduled newsletter trigger.
//!
//! An external scheduler runs this once per send window. It forwards a single
//! authenticated request to the site's schedule endpoint, which owns the
//! actual send orchestration, and hands back whatever JSON that endpoint
//! answered with.

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::NewsletterConfig;
use crate::error::AppError;

pub const SCHEDULE_PATH: &str = "/api/newsletter/schedule";
pub const AUTO_SEND_ACTION: &str = "auto-send";

#[derive(Clone)]
pub struct NewsletterTrigger {
    endpoint: String,
    api_secret: String,
    http: Client,
}

impl NewsletterTrigger {
    pub fn new(config: &NewsletterConfig) -> Self {
        Self {
            endpoint: format!("{}{}", config.domain, SCHEDULE_PATH),
            api_secret: config.api_secret.clone(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one `auto-send` request and returns the response body verbatim.
    ///
    /// The status code is not checked and no timeout is applied; transport
    /// failures and non-JSON bodies propagate to the caller.
    pub async fn trigger(&self) -> Result<Value, AppError> {
        tracing::info!("Triggering newsletter send via {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_secret)
            .json(&json!({ "action": AUTO_SEND_ACTION }))
            .send()
            .await
            .map_err(AppError::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Newsletter endpoint answered HTTP {}", status);
        }

        let body = response.json::<Value>().await.map_err(AppError::Parse)?;

        tracing::debug!(%status, "Newsletter endpoint responded");
        Ok(body)
    }
}

impl std::fmt::Debug for NewsletterTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterTrigger")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_schedule_path() {
        let trigger = NewsletterTrigger::new(&NewsletterConfig {
            domain: "https://jobs.example.com".into(),
            api_secret: "s3cret".into(),
        });

        assert_eq!(
            trigger.endpoint(),
            "https://jobs.example.com/api/newsletter/schedule"
        );
    }
}
