// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoresync: blocking client for a remote game score service.
//!
//! Fetches the full score list as an opaque text blob and submits single
//! `name`/`score` pairs. Parsing, display, retries and validation belong to
//! the caller and the server respectively.

pub mod client;
pub mod command;
pub mod config;
pub mod endpoint;
pub mod error;

pub use client::ScoreClient;
pub use endpoint::{Endpoint, PathEncoding};
pub use error::ScoreError;
