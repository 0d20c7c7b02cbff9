//! Server configuration parsed from environment variables.
//!
//! All variables are optional:
//! - `PORT`: listen port, default 3000
//! - `PUBLIC_DIR`: static files served when no route matches, default `public`
//! - `LOG_FORMAT`: `text` (default) or `json`
//!
//! Leptos' own settings (site root, package name) come from the workspace
//! `Cargo.toml` through `leptos::config::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub public_dir: PathBuf,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// [`ServerError::Config`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value.
    ///
    /// # Errors
    ///
    /// [`ServerError::Config`] when a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match non_blank(lookup("PORT")) {
            None => DEFAULT_PORT,
            Some(raw) => parse_port(&raw)?,
        };
        let public_dir = non_blank(lookup("PUBLIC_DIR")).map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);
        let log_format = parse_log_format(non_blank(lookup("LOG_FORMAT")).as_deref())?;
        Ok(Self { port, public_dir, log_format })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_port(raw: &str) -> Result<u16, ServerError> {
    match raw.parse::<u16>() {
        Ok(0) => Err(ServerError::Config { var: "PORT", value: raw.to_owned(), reason: "must be non-zero".into() }),
        Ok(port) => Ok(port),
        Err(e) => Err(ServerError::Config { var: "PORT", value: raw.to_owned(), reason: e.to_string() }),
    }
}

fn parse_log_format(raw: Option<&str>) -> Result<LogFormat, ServerError> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None | Some("text") => Ok(LogFormat::Text),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(ServerError::Config {
            var: "LOG_FORMAT",
            value: other.to_owned(),
            reason: "expected `text` or `json`".into(),
        }),
    }
}
