//! # CLI Configuration Module
//!
//! Loads the settings the `slotbook` binary needs from the environment.
//!
//! ## Environment Variables
//!
//! - `SLOTBOOK_API_URL`: Root of the booking API (default: "http://localhost:8080/api/scheduler")
//! - `SLOTBOOK_TIMEZONE`: IANA zone the user's days and hours are read in
//!   (falls back to `TZ`, then "UTC")
//! - `SLOTBOOK_USER_ID`, `SLOTBOOK_USER_NAME`, `SLOTBOOK_USER_EMAIL`,
//!   `SLOTBOOK_USER_ROLE`: The signed-in user; all four or none
//! - `SLOTBOOK_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::env;
use std::time::Duration;

use chrono_tz::Tz;
use eyre::{Result, WrapErr, eyre};
use slotbook_core::session::{Role, Session, UserProfile};
use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/scheduler";

const USER_VARS: [&str; 4] = [
    "SLOTBOOK_USER_ID",
    "SLOTBOOK_USER_NAME",
    "SLOTBOOK_USER_EMAIL",
    "SLOTBOOK_USER_ROLE",
];

/// Configuration for the `slotbook` command line tool.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Booking API root, without trailing slash
    pub api_url: String,

    /// Zone user input is interpreted in
    pub zone: Tz,

    /// Identity commands act as; `None` when no user is configured
    pub user: Option<UserProfile>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Log level for the application
    pub log_level: Level,
}

impl CliConfig {
    /// Creates a CliConfig from environment variables.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configured timezone is not a known IANA name
    /// - Only some of the `SLOTBOOK_USER_*` variables are set
    /// - `SLOTBOOK_USER_ID` is not an integer or `SLOTBOOK_USER_ROLE` is not
    ///   `interviewer` or `candidate`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("SLOTBOOK_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let zone_name = lookup("SLOTBOOK_TIMEZONE")
            .or_else(|| lookup("TZ"))
            .unwrap_or_else(|| "UTC".to_string());
        let zone = zone_name
            .trim()
            .parse::<Tz>()
            .map_err(|e| eyre!(e))
            .wrap_err_with(|| format!("Invalid timezone '{zone_name}'"))?;

        let user = load_user(&lookup)?;

        let request_timeout = lookup("SLOTBOOK_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .unwrap_or(30);

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            api_url,
            zone,
            user,
            request_timeout,
            log_level,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn session(&self) -> Session {
        match &self.user {
            Some(user) => Session::signed_in(user.clone()),
            None => Session::anonymous(),
        }
    }
}

fn load_user(lookup: &impl Fn(&str) -> Option<String>) -> Result<Option<UserProfile>> {
    let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let missing: Vec<&str> = USER_VARS
        .into_iter()
        .filter(|key| value(*key).is_none())
        .collect();
    if missing.len() == USER_VARS.len() {
        return Ok(None);
    }
    if !missing.is_empty() {
        return Err(eyre!("Incomplete user configuration, missing {}", missing.join(", ")));
    }

    let value = |key: &str| value(key).unwrap_or_default().trim().to_string();
    Ok(Some(UserProfile {
        id: value("SLOTBOOK_USER_ID")
            .parse()
            .wrap_err("SLOTBOOK_USER_ID must be an integer")?,
        name: value("SLOTBOOK_USER_NAME"),
        email: value("SLOTBOOK_USER_EMAIL"),
        role: value("SLOTBOOK_USER_ROLE")
            .parse::<Role>()
            .wrap_err("Invalid SLOTBOOK_USER_ROLE value")?,
    }))
}
