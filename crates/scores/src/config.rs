// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Args, Parser, Subcommand};

use crate::endpoint::{Endpoint, PathEncoding};
use crate::error::ScoreError;

/// Blocking client for a game score service.
#[derive(Debug, Clone, Parser)]
#[command(name = "scoresync", version)]
pub struct Config {
    #[command(flatten)]
    pub client: ClientConfig,

    /// Log format (json or text).
    #[arg(long, env = "SCORESYNC_LOG_FORMAT", default_value = "text")]
    pub log_format: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "SCORESYNC_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub action: Action,
}

/// Connection settings for [`crate::ScoreClient`].
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Score service base URL, absolute or relative to --origin.
    #[arg(long, env = "SCORESYNC_BASE_URL", default_value = "/api")]
    pub base_url: String,

    /// Origin that a relative base URL is resolved against. Empty disables.
    #[arg(long, env = "SCORESYNC_ORIGIN", default_value = "http://127.0.0.1:8000")]
    pub origin: String,

    /// How player names and scores are placed in the submit path.
    #[arg(long, env = "SCORESYNC_PATH_ENCODING", value_enum, default_value_t = PathEncoding::Verbatim)]
    pub path_encoding: PathEncoding,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Print every score exactly as the service returns it.
    Fetch,
    /// Record a score for a player.
    Submit {
        /// Player name, placed in the request path.
        name: String,
        /// Score value.
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },
}

impl ClientConfig {
    pub fn origin(&self) -> Option<&str> {
        Some(self.origin.as_str()).filter(|o| !o.is_empty())
    }

    pub fn endpoint(&self) -> Result<Endpoint, ScoreError> {
        Endpoint::new(&self.base_url, self.origin(), self.path_encoding)
    }
}

impl Config {
    /// Reject configurations that cannot produce a working client.
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.log_format.as_str() {
            "json" | "text" => {}
            other => anyhow::bail!("invalid --log-format {other:?} (expected json or text)"),
        }
        self.client.endpoint()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
