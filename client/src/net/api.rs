//! REST helpers for the external club API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the transport reports
//! [`FetchError::Unavailable`], so list fetches resolve to bundled data.
//!
//! ERROR HANDLING
//! ==============
//! List fetches return [`Sourced`] rather than `Result`; the failure cause is
//! logged in [`resolve_list`] and kept on the fallback branch.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::sourced::{Sourced, resolve_list};
use super::types::{TeamMember, Wing};
use crate::config::{api_base_url, endpoint};
use crate::content;

/// Key path of the member list inside the `GET /team` envelope.
pub const TEAM_LIST_PATH: &[&str] = &["data", "members"];
/// Key path of the wing list inside the `GET /wings` envelope.
pub const WINGS_LIST_PATH: &[&str] = &["data", "wings"];
/// Key path of the token inside the `POST /auth/login` envelope.
pub const LOGIN_TOKEN_PATH: &[&str] = &["data", "token"];

/// Walk `path` into `body` and decode the array found there.
///
/// # Errors
///
/// [`FetchError::Shape`] when a key is missing or the target is not an
/// array; [`FetchError::Decode`] when an item does not match `T`.
pub fn extract_list<T: DeserializeOwned>(body: &serde_json::Value, path: &[&str]) -> Result<Vec<T>, FetchError> {
    let node = walk(body, path)?;
    if !node.is_array() {
        return Err(shape_error(path));
    }
    serde_json::from_value(node.clone()).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Walk `path` into `body` and return the non-blank string found there.
///
/// # Errors
///
/// [`FetchError::Shape`] when the key is missing, not a string, or blank.
pub fn extract_string(body: &serde_json::Value, path: &[&str]) -> Result<String, FetchError> {
    walk(body, path)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| shape_error(path))
}

fn walk<'a>(body: &'a serde_json::Value, path: &[&str]) -> Result<&'a serde_json::Value, FetchError> {
    path.iter()
        .try_fold(body, |node, key| node.get(key))
        .ok_or_else(|| shape_error(path))
}

fn shape_error(path: &[&str]) -> FetchError {
    FetchError::Shape(path.join("."))
}

/// Fetch the roster from `GET {base}/team`, falling back to the bundled roster.
pub async fn fetch_team_members() -> Sourced<Vec<TeamMember>> {
    let outcome = get_list(&endpoint(api_base_url(), "team"), TEAM_LIST_PATH).await;
    resolve_list("team", outcome, content::team::team_members)
}

/// Fetch wings from `GET {base}/wings`, falling back to the bundled wings.
pub async fn fetch_wings() -> Sourced<Vec<Wing>> {
    let outcome = get_list(&endpoint(api_base_url(), "wings"), WINGS_LIST_PATH).await;
    resolve_list("wings", outcome, content::wings::wings)
}

/// Exchange admin credentials for a token via `POST {base}/auth/login`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the status is not OK, or
/// the envelope carries no token.
pub async fn admin_login(email: &str, password: &str) -> Result<String, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint(api_base_url(), "auth/login"))
            .json(&payload)
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| FetchError::Decode(e.to_string()))?;
        extract_string(&body, LOGIN_TOKEN_PATH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(FetchError::Unavailable)
    }
}

async fn get_list<T: DeserializeOwned>(url: &str, path: &[&str]) -> Result<Vec<T>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| FetchError::Decode(e.to_string()))?;
        extract_list(&body, path)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, path);
        Err(FetchError::Unavailable)
    }
}
