// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `scoresync fetch` and `scoresync submit`.
//!
//! `fetch` writes the score blob to stdout untouched so it can be piped
//! into whatever parses it. User-facing errors go to stderr.

use std::io::Write;

use tracing::debug;

use crate::client::ScoreClient;
use crate::config::{Action, Config};

/// The service answered, but not with a 200.
pub const EXIT_UNAVAILABLE: i32 = 3;

/// Run the configured subcommand. Returns a process exit code.
pub fn run(config: &Config) -> i32 {
    let client = match ScoreClient::from_config(&config.client) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return e.exit_code();
        }
    };

    match &config.action {
        Action::Fetch => fetch(&client, &mut std::io::stdout().lock()),
        Action::Submit { name, score } => submit(&client, name, *score),
    }
}

fn fetch(client: &ScoreClient, out: &mut impl Write) -> i32 {
    match client.fetch_scores() {
        Ok(Some(body)) => {
            if let Err(e) = out.write_all(body.as_bytes()).and_then(|()| out.flush()) {
                eprintln!("error: writing scores: {e}");
                return 1;
            }
            0
        }
        Ok(None) => {
            eprintln!("error: scores unavailable");
            EXIT_UNAVAILABLE
        }
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn submit(client: &ScoreClient, name: &str, score: f64) -> i32 {
    match client.submit_score(name, score) {
        Ok(()) => {
            debug!(player = name, score, "score submitted");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
