//! # Application Configuration
//!
//! Runtime settings for the login and dashboard pages. Every field has a
//! default, so a page without any configuration block behaves exactly like
//! the stock demo.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::AmountPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings shared by both pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page opened after a successful login (and on startup when a token exists)
    pub main_page: String,
    /// Page hosting the login form
    pub login_page: String,
    /// Delay between a successful login and the navigation to `main_page`
    pub redirect_delay_ms: u32,
    pub min_username_len: usize,
    pub min_password_len: usize,
    /// What to do with ledger input that is not a valid amount
    pub amount_policy: AmountPolicy,
    /// Reject further login submits once a redirect has been scheduled
    pub guard_pending_redirect: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            main_page: "index.html".to_string(),
            login_page: "login.html".to_string(),
            redirect_delay_ms: 1500,
            min_username_len: 3,
            min_password_len: 6,
            amount_policy: AmountPolicy::CoerceToZero,
            guard_pending_redirect: true,
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON document. Missing keys keep their defaults.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        if document.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_pages() {
        let config = AppConfig::default();
        assert_eq!(config.main_page, "index.html");
        assert_eq!(config.login_page, "login.html");
        assert_eq!(config.redirect_delay_ms, 1500);
        assert_eq!(config.min_username_len, 3);
        assert_eq!(config.min_password_len, 6);
        assert_eq!(config.amount_policy, AmountPolicy::CoerceToZero);
        assert!(config.guard_pending_redirect);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"redirect_delay_ms": 250, "amount_policy": "strict"}"#).unwrap();
        assert_eq!(config.redirect_delay_ms, 250);
        assert_eq!(config.amount_policy, AmountPolicy::Strict);
        assert_eq!(config.main_page, "index.html");
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AppConfig::from_json("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration document"));
    }
}
