// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Score service endpoint: base URL resolution and route construction.
//!
//! The base is either absolute (`https://scores.example.com/api`) or
//! relative to an origin (`/api`, the same-origin deployment). Both
//! routes hang off the resolved base:
//!
//! - `GET  {base}/score`
//! - `POST {base}/score/{name}/{score}`

use reqwest::Url;

use crate::error::ScoreError;

/// How `name` and `score` are placed into the submit path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PathEncoding {
    /// Interpolate as-is. Matches the existing server contract; a `/` in a
    /// name produces extra path segments.
    #[default]
    Verbatim,
    /// Percent-encode each value as exactly one path segment.
    Percent,
}

/// Resolved base URL of the score service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Absolute base without a trailing slash.
    base: String,
    encoding: PathEncoding,
}

impl Endpoint {
    /// Resolve `base_url`, joining it onto `origin` when it is relative.
    pub fn new(
        base_url: &str,
        origin: Option<&str>,
        encoding: PathEncoding,
    ) -> Result<Self, ScoreError> {
        let url = if is_relative(base_url) {
            let origin = origin.ok_or_else(|| {
                ScoreError::InvalidEndpoint(format!(
                    "relative base url {base_url:?} requires an origin"
                ))
            })?;
            parse(origin)?.join(base_url).map_err(|e| {
                ScoreError::InvalidEndpoint(format!("cannot join {base_url:?} onto {origin:?}: {e}"))
            })?
        } else {
            parse(base_url)?
        };

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScoreError::InvalidEndpoint(format!(
                "unsupported scheme {:?} in {url}",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ScoreError::InvalidEndpoint(format!("{url} cannot be used as a base")));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ScoreError::InvalidEndpoint(format!(
                "{url} must not carry a query or fragment"
            )));
        }

        let base = url.as_str().trim_end_matches('/').to_owned();
        Ok(Self { base, encoding })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn encoding(&self) -> PathEncoding {
        self.encoding
    }

    /// `GET` target listing every score.
    pub fn scores_url(&self) -> String {
        format!("{}/score", self.base)
    }

    /// `POST` target recording `score` for `name`.
    pub fn submit_url(&self, name: &str, score: f64) -> Result<Url, ScoreError> {
        match self.encoding {
            PathEncoding::Verbatim => parse(&format!("{}/score/{name}/{score}", self.base)),
            PathEncoding::Percent => {
                let mut url = parse(&self.scores_url())?;
                url.path_segments_mut()
                    .map_err(|()| {
                        ScoreError::InvalidEndpoint(format!("{} cannot be used as a base", self.base))
                    })?
                    .push(name)
                    .push(&score.to_string());
                Ok(url)
            }
        }
    }
}

fn is_relative(url: &str) -> bool {
    !url.contains("://")
}

fn parse(url: &str) -> Result<Url, ScoreError> {
    Url::parse(url).map_err(|e| ScoreError::InvalidEndpoint(format!("invalid url {url:?}: {e}")))
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
