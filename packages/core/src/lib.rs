// Library root. The binary in `src/main.rs` and the integration tests in
// `tests/` both build on these modules.

pub mod analytics;
pub mod cli;
pub mod config;
pub mod email;
pub mod error;
pub mod logging;
pub mod newsletter;
pub mod profile;
pub mod site;

pub use analytics::{Analytics, DataLayer, LogHook, TrackingHook};
pub use config::{AnalyticsConfig, EmailConfig, NewsletterConfig};
pub use email::{Email, Mailer, ResendClient};
pub use error::AppError;
pub use newsletter::NewsletterTrigger;
pub use profile::UserProfile;
pub use site::SiteConfig;
