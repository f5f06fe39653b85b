use anyhow::{Context, Result};

use crate::seo::SiteSettings;

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub site_url: String,
    pub site_name: String,

    // Server
    pub port: u16,
    pub assets_dir: String,

    // Contact form relay
    pub form_relay_url: String,
    pub form_relay_access_key: Option<String>,
    pub form_relay_timeout_secs: u64,

    // Build-time generators
    pub prerender_output_dir: String,
    pub prerender_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = SiteSettings::default();

        Ok(Self {
            // Site
            site_url: std::env::var("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_url),
            site_name: std::env::var("SITE_NAME").unwrap_or(defaults.site_name),

            // Server
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or_else(|_| "public".to_string()),

            // Contact form relay
            form_relay_url: std::env::var("FORM_RELAY_URL")
                .unwrap_or_else(|_| "https://api.web3forms.com/submit".to_string()),
            form_relay_access_key: std::env::var("FORM_RELAY_ACCESS_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            form_relay_timeout_secs: match std::env::var("FORM_RELAY_TIMEOUT_SECS") {
                Ok(v) => v
                    .parse()
                    .context("FORM_RELAY_TIMEOUT_SECS must be a number of seconds")?,
                Err(_) => 10,
            },

            // Build-time generators
            prerender_output_dir: std::env::var("PRERENDER_OUTPUT_DIR")
                .unwrap_or_else(|_| "dist".to_string()),
            prerender_concurrency: std::env::var("PRERENDER_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(4),
        })
    }

    /// Site-wide SEO settings derived from this config.
    pub fn site(&self) -> SiteSettings {
        SiteSettings {
            site_url: self.site_url.clone(),
            site_name: self.site_name.clone(),
            ..SiteSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 9] = [
        "SITE_URL",
        "SITE_NAME",
        "PORT",
        "ASSETS_DIR",
        "FORM_RELAY_URL",
        "FORM_RELAY_ACCESS_KEY",
        "FORM_RELAY_TIMEOUT_SECS",
        "PRERENDER_OUTPUT_DIR",
        "PRERENDER_CONCURRENCY",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.site_url, "https://mariaangelescapas.com");
        assert_eq!(config.port, 8080);
        assert_eq!(config.assets_dir, "public");
        assert_eq!(config.form_relay_access_key, None);
        assert_eq!(config.form_relay_timeout_secs, 10);
        assert_eq!(config.prerender_output_dir, "dist");
        assert_eq!(config.prerender_concurrency, 4);
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        clear_env();
        std::env::set_var("SITE_URL", "https://staging.example.com/");
        std::env::set_var("PORT", "3000");
        std::env::set_var("FORM_RELAY_ACCESS_KEY", "relay-key");
        std::env::set_var("PRERENDER_CONCURRENCY", "0");
        std::env::set_var("FORM_RELAY_TIMEOUT_SECS", "3");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.site_url, "https://staging.example.com");
        assert_eq!(config.port, 3000);
        assert_eq!(config.form_relay_access_key.as_deref(), Some("relay-key"));
        assert_eq!(config.prerender_concurrency, 4);
        assert_eq!(config.form_relay_timeout_secs, 3);
        assert_eq!(config.site().site_url, "https://staging.example.com");
    }

    #[test]
    #[serial]
    fn test_blank_access_key_is_unset() {
        clear_env();
        std::env::set_var("FORM_RELAY_ACCESS_KEY", "  ");
        let config = Config::from_env().unwrap();
        clear_env();
        assert_eq!(config.form_relay_access_key, None);
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "eighty");
        let result = Config::from_env();
        clear_env();
        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_invalid_relay_timeout_is_error() {
        clear_env();
        std::env::set_var("FORM_RELAY_TIMEOUT_SECS", "soon");
        let result = Config::from_env();
        clear_env();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("FORM_RELAY_TIMEOUT_SECS"));
    }
}
