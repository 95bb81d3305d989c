//! HTTP client for the Waitlist Service
//!
//! The browser build talks to the service through `gloo-net` (fetch); the
//! server build uses `reqwest`. Both send the same JSON body and hand the raw
//! response to [`interpret_response`].
//!
//! Signups are only ever submitted from the hydrated page. The server never
//! proxies them: the `reqwest` implementation exists so the form component
//! type-checks under `ssr` and so the client can be exercised natively against
//! a mock service.

use super::error::WaitlistError;
use super::response::{interpret_response, is_success_status};
use super::types::SignupRequest;
use crate::core::config::Config;

/// Anything that can accept a signup on behalf of the form controller
#[allow(async_fn_in_trait)]
pub trait WaitlistService {
    /// Submit one signup; returns the message to show on success
    async fn join(&self, request: &SignupRequest) -> Result<String, WaitlistError>;
}

/// Client for `POST {backend}/api/waitlist`
#[derive(Debug, Clone)]
pub struct WaitlistClient {
    endpoint: String,
    #[cfg(feature = "ssr")]
    http_client: reqwest::Client,
}

impl WaitlistClient {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.waitlist_endpoint(),
            #[cfg(feature = "ssr")]
            http_client: reqwest::Client::new(),
        }
    }

    /// Full URL the client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(not(feature = "ssr"))]
impl WaitlistService for WaitlistClient {
    async fn join(&self, request: &SignupRequest) -> Result<String, WaitlistError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| WaitlistError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| WaitlistError::Transport(e.to_string()))?;

        // An unreadable error body is treated as empty so the generic
        // failure message applies
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(_) if !is_success_status(status) => String::new(),
            Err(e) => return Err(WaitlistError::Transport(e.to_string())),
        };

        let outcome = interpret_response(status, &body);
        if let Err(ref e) = outcome {
            leptos::logging::warn!("Waitlist signup failed ({}): {}", status, e);
        }
        outcome
    }
}

#[cfg(feature = "ssr")]
impl WaitlistService for WaitlistClient {
    async fn join(&self, request: &SignupRequest) -> Result<String, WaitlistError> {
        tracing::debug!(
            "Waitlist signup: endpoint={}, name={}, referrer={}, notes={}",
            self.endpoint,
            request.name.is_some(),
            request.referrer.is_some(),
            request.notes.is_some()
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Waitlist request failed: {}", e);
                WaitlistError::Transport(e.to_string())
            })?;

        // An unreadable error body is treated as empty so the generic
        // failure message applies
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if !is_success_status(status) => {
                tracing::debug!("Discarding unreadable error body: {}", e);
                String::new()
            }
            Err(e) => return Err(WaitlistError::Transport(e.to_string())),
        };

        let outcome = interpret_response(status, &body);
        if let Err(ref e) = outcome {
            tracing::warn!("Waitlist signup failed ({}): {}", status, e);
        }
        outcome
    }
}
