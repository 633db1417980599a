//! REST API helpers for the portfolio backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and host tests: every call returns
//! [`ApiError::Unavailable`], since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError`] with the backend's `{message}` when
//! one was sent. Pages decide what a failure means; only the code viewer
//! treats 401 specially. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, ErrorBody, Experience, LoginResponse, Profile, Project, SourceFile};
use crate::config::ClientConfig;
use crate::state::session::AuthToken;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const PROFILE_PATH: &str = "/api/portfolio/profile";
pub const EXPERIENCE_PATH: &str = "/api/portfolio/experience";
pub const PROJECTS_PATH: &str = "/api/portfolio/projects";
pub const SOURCE_FILES_PATH: &str = "/api/portfolio/source-files";

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: Option<ErrorBody>) -> Self {
        let message = body.and_then(|b| b.message).filter(|m| !m.is_empty());
        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Status { status, message }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Message supplied by the backend, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &AuthToken) -> String {
    format!("Bearer {}", token.as_str())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<ErrorBody>().await.ok();
        return Err(ApiError::from_status(status, body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    config: &ClientConfig,
    path: &str,
    token: Option<&AuthToken>,
) -> Result<T, ApiError> {
    let mut request = gloo_net::http::Request::get(&config.endpoint(path));
    if let Some(token) = token {
        request = request.header("Authorization", &bearer_header(token));
    }
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the backend rejects the
/// credentials, or another variant when the request fails.
pub async fn login(config: &ClientConfig, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint(LOGIN_PATH))
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the portfolio owner profile.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not parse.
pub async fn fetch_profile(config: &ClientConfig) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, PROFILE_PATH, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the experience timeline.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not parse.
pub async fn fetch_experience(config: &ClientConfig) -> Result<Vec<Experience>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, EXPERIENCE_PATH, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the project list.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not parse.
pub async fn fetch_projects(config: &ClientConfig) -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, PROJECTS_PATH, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the source files shown in the code viewer. Requires a bearer token.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token is rejected.
pub async fn fetch_source_files(config: &ClientConfig, token: &AuthToken) -> Result<Vec<SourceFile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(config, SOURCE_FILES_PATH, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}
