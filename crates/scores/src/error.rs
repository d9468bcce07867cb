// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

/// Failures surfaced by the score client.
///
/// A non-200 fetch is not an error (it yields `None`), and submit never
/// inspects the status, so only misconfiguration and transport failures
/// reach the caller.
#[derive(Debug)]
pub enum ScoreError {
    /// The base URL or a route built from it is not a usable HTTP URL.
    InvalidEndpoint(String),
    /// DNS failure, refused or reset connection, or a body that could not be read.
    Transport(reqwest::Error),
}

impl ScoreError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::Transport(_) => "TRANSPORT",
        }
    }

    /// Process exit code used by the `scoresync` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidEndpoint(_) => 2,
            Self::Transport(_) => 1,
        }
    }
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint(msg) => write!(f, "{}: {msg}", self.as_str()),
            Self::Transport(e) => write!(f, "{}: {e}", self.as_str()),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEndpoint(_) => None,
            Self::Transport(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ScoreError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}
