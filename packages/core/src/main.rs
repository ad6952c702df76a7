use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;

use site_integrations::analytics::{Analytics, LogHook};
use site_integrations::cli::{Cli, Command};
use site_integrations::config::{self, AnalyticsConfig, NewsletterConfig};
use site_integrations::error::AppError;
use site_integrations::logging::init_logging;
use site_integrations::newsletter::NewsletterTrigger;
use site_integrations::site::SiteConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if let Err(err) = run(cli.command).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Newsletter { domain } => {
            let newsletter = NewsletterConfig::from_lookup(|name| {
                if name == config::PUBLIC_DOMAIN {
                    domain.clone().or_else(|| std::env::var(name).ok())
                } else {
                    std::env::var(name).ok()
                }
            })?;
            tracing::debug!("Newsletter config: {:?}", newsletter);

            let analytics = Analytics::new(&AnalyticsConfig::from_env(), Some(Arc::new(LogHook)));

            let response = NewsletterTrigger::new(&newsletter).trigger().await?;
            analytics.track("newsletter_trigger");

            println!("{}", response);
        }

        Command::SiteConfig { site_url } => {
            let site = SiteConfig::new(&resolve_site_url(site_url)?);
            let json = serde_json::to_string_pretty(&site)
                .map_err(|err| AppError::config(err.to_string()))?;
            println!("{}", json);
        }

        Command::Robots { site_url } => {
            let site = SiteConfig::new(&resolve_site_url(site_url)?);
            if let Some(robots) = site.sitemap.robots_txt() {
                print!("{}", robots);
            }
        }
    }

    Ok(())
}

fn resolve_site_url(flag: Option<String>) -> Result<String, AppError> {
    flag.or_else(|| std::env::var(config::PUBLIC_DOMAIN).ok())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            AppError::config(format!("{} or --site-url is required", config::PUBLIC_DOMAIN))
        })
}
