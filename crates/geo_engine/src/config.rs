//! Environment-style configuration with development fallbacks.
//!
//! Values are read once through a lookup function (the process environment
//! by default); missing or empty variables fall back to development defaults
//! with a warning. [`EnvConfig::validate`] reports problems without failing.

use geo_core::EnvironmentReport;
use geo_logging::{geo_error, geo_warn};
use thiserror::Error;
use url::Url;

pub const APP_NAME_VAR: &str = "GEO_APP_NAME";
pub const PAYMENT_LINK_URL_VAR: &str = "GEO_PAYMENT_LINK_URL";
pub const RETURN_URL_VAR: &str = "GEO_RETURN_URL";

pub const FALLBACK_APP_NAME: &str = "GEO POC";
pub const FALLBACK_PAYMENT_LINK_URL: &str = "https://buy.stripe.com/test_00g5lq9Ej4Qs8Vy6oo";
pub const FALLBACK_RETURN_URL: &str = "http://localhost:5173/dashboard?paid=1";

/// Value shipped in sample configs; never a usable payment link.
pub const PLACEHOLDER_PAYMENT_LINK_URL: &str = "https://buy.stripe.com/test_xxx";
pub const PAYMENT_LINK_PREFIX: &str = "https://buy.stripe.com/";
const TEST_MODE_MARKER: &str = "/test_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL ({value}): {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub app_name: String,
    pub payment_link_url: String,
    pub return_url: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            app_name: FALLBACK_APP_NAME.to_string(),
            payment_link_url: FALLBACK_PAYMENT_LINK_URL.to_string(),
            return_url: FALLBACK_RETURN_URL.to_string(),
        }
    }
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str, fallback: &str| match lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                geo_warn!("Environment variable {} is not set, using fallback: {}", key, fallback);
                fallback.to_string()
            }
        };

        Self {
            app_name: read(APP_NAME_VAR, FALLBACK_APP_NAME),
            payment_link_url: read(PAYMENT_LINK_URL_VAR, FALLBACK_PAYMENT_LINK_URL),
            return_url: read(RETURN_URL_VAR, FALLBACK_RETURN_URL),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Configured payment link, or the fallback when it does not parse.
    pub fn payment_link_url(&self) -> &str {
        checked_url(PAYMENT_LINK_URL_VAR, &self.payment_link_url, FALLBACK_PAYMENT_LINK_URL)
    }

    /// Configured return URL, or the fallback when it does not parse.
    pub fn return_url(&self) -> &str {
        checked_url(RETURN_URL_VAR, &self.return_url, FALLBACK_RETURN_URL)
    }

    pub fn validate(&self) -> EnvironmentReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let payment = self.payment_link_url.as_str();
        if payment.is_empty() {
            errors.push(format!(
                "{PAYMENT_LINK_URL_VAR} is required for payment functionality"
            ));
        } else if payment == PLACEHOLDER_PAYMENT_LINK_URL {
            errors.push(format!(
                "{PAYMENT_LINK_URL_VAR} is using placeholder value - update with real Stripe Payment Link"
            ));
        } else if !payment.starts_with(PAYMENT_LINK_PREFIX) {
            errors.push(format!(
                "{PAYMENT_LINK_URL_VAR} must be a valid Stripe Payment Link URL"
            ));
        } else if payment.contains(TEST_MODE_MARKER) {
            warnings.push(
                "Using Stripe test mode - ensure this is intentional for your environment"
                    .to_string(),
            );
        }

        if self.return_url.is_empty() {
            errors.push(format!("{RETURN_URL_VAR} is required for payment confirmation"));
        }

        if self.app_name.is_empty() {
            warnings.push(format!("{APP_NAME_VAR} not set, using default"));
        }

        EnvironmentReport::from_findings(errors, warnings)
    }
}

pub fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        var,
        value: value.to_string(),
        source,
    })
}

fn checked_url<'a>(var: &'static str, value: &'a str, fallback: &'static str) -> &'a str {
    match parse_url(var, value) {
        Ok(_) => value,
        Err(err) => {
            geo_error!("{}; using fallback {}", err, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_vars_fall_back() {
        let config = EnvConfig::from_lookup(|key| match key {
            APP_NAME_VAR => Some(String::new()),
            RETURN_URL_VAR => Some("https://app.example.com/done?paid=1".to_string()),
            _ => None,
        });

        assert_eq!(config.app_name(), FALLBACK_APP_NAME);
        assert_eq!(config.payment_link_url, FALLBACK_PAYMENT_LINK_URL);
        assert_eq!(config.return_url(), "https://app.example.com/done?paid=1");
    }

    #[test]
    fn malformed_urls_fall_back_on_access() {
        let config = EnvConfig {
            return_url: "not a url".to_string(),
            ..EnvConfig::default()
        };
        assert_eq!(config.return_url(), FALLBACK_RETURN_URL);
        assert!(parse_url(RETURN_URL_VAR, "not a url").is_err());
    }
}
