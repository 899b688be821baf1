//! # Login Validation and Credential Verification
//!
//! Field checks run before any credential lookup. Verification sits behind
//! [`CredentialVerifier`] so the demo table can be swapped for a real
//! backend without touching the form handling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

pub const USERNAME_ERROR_ID: &str = "usernameError";
pub const PASSWORD_ERROR_ID: &str = "passwordError";

/// Field-level problem reported next to the offending input
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Username must be at least {min} characters")]
    TooShortUsername { min: usize },
    #[error("Password must be at least {min} characters")]
    TooShortPassword { min: usize },
}

impl ValidationError {
    /// DOM id of the inline message element for this error
    pub fn field_error_id(&self) -> &'static str {
        match self {
            ValidationError::TooShortUsername { .. } => USERNAME_ERROR_ID,
            ValidationError::TooShortPassword { .. } => PASSWORD_ERROR_ID,
        }
    }
}

/// Credentials did not match. Deliberately does not say which field was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AuthenticationError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),
    #[error("A redirect is already pending")]
    RedirectPending,
}

/// Raw values read from the login form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>, remember_me: bool) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember_me,
        }
    }

    /// Trim both fields and check their lengths, username first.
    ///
    /// Returns the trimmed `(username, password)` pair on success.
    pub fn validate(&self, config: &AppConfig) -> Result<(String, String), ValidationError> {
        let username = self.username.trim();
        let password = self.password.trim();

        if username.chars().count() < config.min_username_len {
            return Err(ValidationError::TooShortUsername {
                min: config.min_username_len,
            });
        }
        if password.chars().count() < config.min_password_len {
            return Err(ValidationError::TooShortPassword {
                min: config.min_password_len,
            });
        }

        Ok((username.to_string(), password.to_string()))
    }
}

/// Decides whether a username/password pair is valid
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthenticationError>;
}

/// Fixed username → password table compiled into the app
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new<I, U, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: entries
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }

    /// The demo accounts
    pub fn demo() -> Self {
        Self::new([
            ("admin", "password123"),
            ("user", "user1234"),
            ("demo", "demo123"),
        ])
    }

    /// One `Username: .. | Password: ..` line per account, sorted by username
    pub fn hint_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .users
            .iter()
            .map(|(username, password)| format!("Username: {} | Password: {}", username, password))
            .collect();
        lines.sort();
        lines
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::demo()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthenticationError> {
        match self.users.get(username) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(AuthenticationError::InvalidCredentials),
        }
    }
}
