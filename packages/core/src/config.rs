use std::env;

use crate::error::AppError;

pub const PUBLIC_DOMAIN: &str = "PUBLIC_DOMAIN";
pub const NEWSLETTER_API_SECRET: &str = "NEWSLETTER_API_SECRET";
pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const PUBLIC_GA_MEASUREMENT_ID: &str = "PUBLIC_GA_MEASUREMENT_ID";

/// Settings for the scheduled newsletter trigger.
#[derive(Clone)]
pub struct NewsletterConfig {
    pub domain: String,
    pub api_secret: String,
}

/// Settings for the transactional-email client.
#[derive(Clone)]
pub struct EmailConfig {
    pub api_key: String,
}

/// Settings for the analytics gate. An empty id disables reporting.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    pub measurement_id: String,
}

fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Reads a variable that must be present and non-blank.
fn required<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!("{} is required", name))),
    }
}

impl NewsletterConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let domain = required(&lookup, PUBLIC_DOMAIN)?;
        let api_secret = required(&lookup, NEWSLETTER_API_SECRET)?;

        Ok(Self {
            domain: domain.trim_end_matches('/').to_string(),
            api_secret,
        })
    }
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, RESEND_API_KEY)?;
        Ok(Self { api_key })
    }
}

impl AnalyticsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            measurement_id: lookup(PUBLIC_GA_MEASUREMENT_ID)
                .map(|id| id.trim().to_string())
                .unwrap_or_default(),
        }
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for NewsletterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterConfig")
            .field("domain", &self.domain)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn newsletter_config_requires_domain() {
        let err = NewsletterConfig::from_lookup(vars(&[(NEWSLETTER_API_SECRET, "s3cret")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains(PUBLIC_DOMAIN)));
    }

    #[test]
    fn newsletter_config_requires_secret() {
        let err = NewsletterConfig::from_lookup(vars(&[(PUBLIC_DOMAIN, "https://example.com")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains(NEWSLETTER_API_SECRET)));
    }

    #[test]
    fn newsletter_config_strips_trailing_slash() {
        let config = NewsletterConfig::from_lookup(vars(&[
            (PUBLIC_DOMAIN, "https://example.com/"),
            (NEWSLETTER_API_SECRET, "s3cret"),
        ]))
        .unwrap();
        assert_eq!(config.domain, "https://example.com");
    }

    #[test]
    fn email_config_rejects_blank_key() {
        let err = EmailConfig::from_lookup(vars(&[(RESEND_API_KEY, "  ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn email_config_accepts_key() {
        let config = EmailConfig::from_lookup(vars(&[(RESEND_API_KEY, "re_123")])).unwrap();
        assert_eq!(config.api_key, "re_123");
    }

    #[test]
    fn analytics_config_defaults_to_empty_id() {
        let config = AnalyticsConfig::from_lookup(vars(&[]));
        assert!(config.measurement_id.is_empty());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = EmailConfig {
            api_key: "re_123".into(),
        };
        assert!(!format!("{:?}", config).contains("re_123"));
    }
}
