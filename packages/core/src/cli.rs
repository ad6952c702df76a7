use clap::{Parser, Subcommand};

/// Site integration commands
#[derive(Debug, Parser)]
#[command(
    name = "site-integrations",
    version,
    about = "Newsletter trigger and build-time site configuration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask the site to run its scheduled newsletter send
    Newsletter {
        /// Base URL of the site (overrides PUBLIC_DOMAIN)
        #[arg(long)]
        domain: Option<String>,
    },

    /// Print the static site configuration as JSON
    SiteConfig {
        /// Public site URL (overrides PUBLIC_DOMAIN)
        #[arg(long)]
        site_url: Option<String>,
    },

    /// Print the robots.txt the sitemap generator emits
    Robots {
        /// Public site URL (overrides PUBLIC_DOMAIN)
        #[arg(long)]
        site_url: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_newsletter_with_domain_override() {
        let cli = Cli::try_parse_from(["site-integrations", "newsletter", "--domain", "http://localhost:3000"])
            .unwrap();

        match cli.command {
            Command::Newsletter { domain } => {
                assert_eq!(domain.as_deref(), Some("http://localhost:3000"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_site_config_without_flags() {
        let cli = Cli::try_parse_from(["site-integrations", "site-config"]).unwrap();
        assert!(matches!(cli.command, Command::SiteConfig { site_url: None }));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["site-integrations", "deploy"]).is_err());
    }
}
