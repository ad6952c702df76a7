use thiserror::Error;

/// Unified application error.
///
/// Configuration problems are raised before any network activity; transport
/// and parse failures keep the underlying `reqwest` error as their source.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("Provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_the_missing_variable() {
        let err = AppError::config("RESEND_API_KEY is required");
        assert_eq!(err.to_string(), "Config error: RESEND_API_KEY is required");
    }

    #[test]
    fn provider_error_includes_status_and_body() {
        let err = AppError::Provider {
            status: 422,
            body: "missing `to`".into(),
        };
        assert_eq!(err.to_string(), "Provider returned HTTP 422: missing `to`");
    }
}
