// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking HTTP client for the score service.
//!
//! Both operations hold the calling thread until the round-trip finishes
//! or the transport fails. There is no timeout and no cancellation, so a
//! hung server blocks the caller indefinitely. Callers that need to stay
//! responsive must run these on a dedicated thread.
//!
//! Built on `reqwest::blocking`, which drives its own runtime in the
//! background: never call into [`ScoreClient`] from inside an async task.

use std::sync::Once;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::ScoreError;

static CRYPTO_INIT: Once = Once::new();

/// Install the ring crypto provider for reqwest/rustls.
/// Needed even for plain HTTP because the client builds its TLS config eagerly.
pub fn ensure_crypto() {
    CRYPTO_INIT.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Client for one score service endpoint.
pub struct ScoreClient {
    endpoint: Endpoint,
    client: Client,
}

impl ScoreClient {
    pub fn new(endpoint: Endpoint) -> Result<Self, ScoreError> {
        ensure_crypto();
        let client = Client::builder()
            .timeout(None::<Duration>)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { endpoint, client })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ScoreError> {
        Self::new(config.endpoint()?)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Fetch every score as the raw response body.
    ///
    /// Returns `Ok(None)` for any status other than exactly 200; the body
    /// is handed back unparsed otherwise.
    pub fn fetch_scores(&self) -> Result<Option<String>, ScoreError> {
        let url = self.endpoint.scores_url();
        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        debug!(method = "GET", %url, %status, "score request completed");

        if status != StatusCode::OK {
            warn!(%url, %status, "scores unavailable");
            return Ok(None);
        }
        Ok(Some(resp.text()?))
    }

    /// Record `score` for `name` with an empty-bodied POST.
    ///
    /// The response status is not inspected; only transport failures are
    /// reported.
    pub fn submit_score(&self, name: &str, score: impl Into<f64>) -> Result<(), ScoreError> {
        let url = self.endpoint.submit_url(name, score.into())?;
        let resp = self.client.post(url.clone()).send()?;
        debug!(method = "POST", %url, status = %resp.status(), "score request completed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
