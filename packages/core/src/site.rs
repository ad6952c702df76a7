//! Static site configuration.
//!
//! Nothing here changes at runtime. Build tooling reads it as JSON through
//! the `site-config` command (sitemap generator, image proxy, styling
//! toolchain).

use std::collections::BTreeMap;

use reqwest::Url;
use serde::Serialize;

/// Entries per sitemap file.
pub const SITEMAP_SIZE: usize = 7000;

pub const ALLOWED_IMAGE_HOSTS: &[&str] = &["img.clerk.com"];

pub const CONTENT_GLOBS: &[&str] = &[
    "./pages/**/*.{js,ts,jsx,tsx,mdx}",
    "./components/**/*.{js,ts,jsx,tsx,mdx}",
    "./app/**/*.{js,ts,jsx,tsx,mdx}",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapConfig {
    pub site_url: String,
    pub sitemap_size: usize,
    pub generate_robots_txt: bool,
}

impl SitemapConfig {
    /// Number of sitemap files needed to hold `entries` URLs.
    pub fn chunk_count(&self, entries: usize) -> usize {
        entries.div_ceil(self.sitemap_size.max(1)).max(1)
    }

    pub fn robots_txt(&self) -> Option<String> {
        if !self.generate_robots_txt {
            return None;
        }

        Some(format!(
            "# *\nUser-agent: *\nAllow: /\n\n# Host\nHost: {url}\n\n# Sitemaps\nSitemap: {url}/sitemap.xml\n",
            url = self.site_url
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub remote_patterns: Vec<RemotePattern>,
}

impl ImageConfig {
    /// True when `url` points at an allowlisted remote image host.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };

        self.remote_patterns
            .iter()
            .any(|pattern| pattern.protocol == parsed.scheme() && pattern.hostname == host)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub content: Vec<String>,
    pub colors: BTreeMap<String, String>,
    pub font_family: BTreeMap<String, Vec<String>>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let colors = [
            ("primary", "#2563eb"),
            ("primary-foreground", "#ffffff"),
            ("background", "#ffffff"),
            ("foreground", "#0f172a"),
            ("muted", "#f1f5f9"),
            ("accent", "#f59e0b"),
        ]
        .into_iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect();

        let font_family = BTreeMap::from([
            (
                "sans".to_string(),
                vec!["Inter".to_string(), "system-ui".to_string(), "sans-serif".to_string()],
            ),
            (
                "mono".to_string(),
                vec!["JetBrains Mono".to_string(), "monospace".to_string()],
            ),
        ]);

        Self {
            content: CONTENT_GLOBS.iter().map(|glob| glob.to_string()).collect(),
            colors,
            font_family,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub sitemap: SitemapConfig,
    pub images: ImageConfig,
    pub theme: ThemeConfig,
}

impl SiteConfig {
    pub fn new(site_url: &str) -> Self {
        Self {
            sitemap: SitemapConfig {
                site_url: site_url.trim_end_matches('/').to_string(),
                sitemap_size: SITEMAP_SIZE,
                generate_robots_txt: true,
            },
            images: ImageConfig {
                remote_patterns: ALLOWED_IMAGE_HOSTS
                    .iter()
                    .map(|host| RemotePattern {
                        protocol: "https".to_string(),
                        hostname: host.to_string(),
                    })
                    .collect(),
            },
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_url_loses_trailing_slash() {
        let config = SiteConfig::new("https://jobs.example.com/");
        assert_eq!(config.sitemap.site_url, "https://jobs.example.com");
        assert_eq!(config.sitemap.sitemap_size, SITEMAP_SIZE);
    }

    #[test]
    fn chunk_count_rounds_up() {
        let sitemap = SiteConfig::new("https://jobs.example.com").sitemap;

        assert_eq!(sitemap.chunk_count(0), 1);
        assert_eq!(sitemap.chunk_count(7000), 1);
        assert_eq!(sitemap.chunk_count(7001), 2);
    }

    #[test]
    fn robots_txt_points_at_sitemap() {
        let sitemap = SiteConfig::new("https://jobs.example.com").sitemap;
        let robots = sitemap.robots_txt().unwrap();

        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Sitemap: https://jobs.example.com/sitemap.xml"));
    }

    #[test]
    fn robots_txt_can_be_disabled() {
        let mut sitemap = SiteConfig::new("https://jobs.example.com").sitemap;
        sitemap.generate_robots_txt = false;
        assert!(sitemap.robots_txt().is_none());
    }

    #[test]
    fn image_allowlist_matches_scheme_and_host() {
        let images = SiteConfig::new("https://jobs.example.com").images;

        assert!(images.is_allowed("https://img.clerk.com/avatar.png"));
        assert!(!images.is_allowed("http://img.clerk.com/avatar.png"));
        assert!(!images.is_allowed("https://evil.example.com/avatar.png"));
        assert!(!images.is_allowed("not a url"));
    }

    #[test]
    fn serializes_with_tooling_field_names() {
        let value = serde_json::to_value(SiteConfig::new("https://jobs.example.com")).unwrap();

        assert_eq!(value["sitemap"]["siteUrl"], "https://jobs.example.com");
        assert_eq!(value["sitemap"]["generateRobotsTxt"], true);
        assert_eq!(value["images"]["remotePatterns"][0]["hostname"], "img.clerk.com");
        assert_eq!(value["theme"]["content"].as_array().unwrap().len(), 3);
    }
}
