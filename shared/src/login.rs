//! # Login Flow
//!
//! `LoginController` runs one submit end to end: field validation,
//! credential verification, session write, and the redirect the caller
//! must schedule. The timer itself belongs to the UI layer.

use serde::{Deserialize, Serialize};

use crate::auth::{CredentialVerifier, LoginError, LoginForm, StaticCredentials};
use crate::config::AppConfig;
use crate::session::{self, KeyValueStore};

pub const SUCCESS_MESSAGE: &str = "✓ Login successful! Redirecting...";

/// Navigation the caller has to perform once `delay_ms` has elapsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub target: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub username: String,
    pub token: String,
    pub redirect: Redirect,
}

impl LoginSuccess {
    pub fn message(&self) -> &'static str {
        SUCCESS_MESSAGE
    }
}

/// Banner text for a failed submit. Validation failures are shown inline instead.
pub fn failure_banner(error: &LoginError) -> Option<String> {
    match error {
        LoginError::Validation(_) => None,
        LoginError::Authentication(e) => Some(format!("✗ {}", e)),
        LoginError::RedirectPending => None,
    }
}

pub struct LoginController<V: CredentialVerifier = StaticCredentials> {
    config: AppConfig,
    verifier: V,
    redirect_pending: bool,
}

impl LoginController<StaticCredentials> {
    pub fn with_demo_credentials(config: AppConfig) -> Self {
        Self::new(config, StaticCredentials::demo())
    }
}

impl<V: CredentialVerifier> LoginController<V> {
    pub fn new(config: AppConfig, verifier: V) -> Self {
        Self {
            config,
            verifier,
            redirect_pending: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn is_redirect_pending(&self) -> bool {
        self.redirect_pending
    }

    /// Handle one form submit.
    ///
    /// On success the session marker is already written when this returns.
    pub fn submit(
        &mut self,
        store: &mut impl KeyValueStore,
        form: &LoginForm,
        now_millis: u64,
    ) -> Result<LoginSuccess, LoginError> {
        if self.redirect_pending && self.config.guard_pending_redirect {
            log::warn!("Ignoring login submit while a redirect is pending");
            return Err(LoginError::RedirectPending);
        }

        let (username, password) = form.validate(&self.config)?;

        if let Err(e) = self.verifier.verify(&username, &password) {
            log::info!("Login rejected for '{}'", username);
            return Err(e.into());
        }

        let token = session::generate_token(&username, now_millis);
        session::record_login(store, &username, &token, form.remember_me);
        self.redirect_pending = true;
        log::info!(
            "Login accepted for '{}', redirecting to {} in {}ms",
            username,
            self.config.main_page,
            self.config.redirect_delay_ms
        );

        Ok(LoginSuccess {
            username,
            token,
            redirect: Redirect {
                target: self.config.main_page.clone(),
                delay_ms: self.config.redirect_delay_ms,
            },
        })
    }
}
