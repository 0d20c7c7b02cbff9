//! Client build-time configuration.
//!
//! The external API base is baked in at compile time from `AETHER_API_URL`
//! so the WASM bundle and the SSR binary agree on it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `AETHER_API_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Base URL of the external club API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    resolve_base(option_env!("AETHER_API_URL"))
}

fn resolve_base(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Join `path` onto `base` with exactly one slash between them.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
