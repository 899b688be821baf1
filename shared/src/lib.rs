//! Domain rules for the finance dashboard: login validation, the session
//! marker, the monthly ledger and the chart data built from it.
//!
//! Nothing in this crate touches the DOM, so all of it runs under plain
//! `cargo test`.

pub mod auth;
pub mod chart;
pub mod config;
pub mod ledger;
pub mod login;
pub mod session;

pub use auth::{
    AuthenticationError, CredentialVerifier, LoginError, LoginForm, StaticCredentials, ValidationError,
};
pub use chart::{export_file_name, ChartKind, ChartSpec, Dataset, Rgba};
pub use config::{AppConfig, ConfigError};
pub use ledger::{AmountPolicy, EntryKind, LedgerError, LedgerInputs, Month, MonthlyLedger};
pub use login::{LoginController, LoginSuccess, Redirect};
pub use session::{KeyValueStore, MemoryStore, SessionMarker, StartupAction};
