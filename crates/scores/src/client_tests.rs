// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::endpoint::PathEncoding;

fn closed_port_client() -> anyhow::Result<ScoreClient> {
    // Port 1 should refuse connections.
    let endpoint = Endpoint::new("http://127.0.0.1:1/api", None, PathEncoding::Verbatim)?;
    Ok(ScoreClient::new(endpoint)?)
}

#[test]
fn fetch_connection_refused_is_transport_error() -> anyhow::Result<()> {
    let client = closed_port_client()?;
    let err = client.fetch_scores().err();
    assert!(matches!(err, Some(ScoreError::Transport(_))), "got {err:?}");
    Ok(())
}

#[test]
fn submit_connection_refused_is_transport_error() -> anyhow::Result<()> {
    let client = closed_port_client()?;
    let err = client.submit_score("alice", 42.0).err();
    match err {
        Some(e) => {
            assert_eq!(e.as_str(), "TRANSPORT");
            assert_eq!(e.exit_code(), 1);
            assert!(std::error::Error::source(&e).is_some());
        }
        None => unreachable!("submit against a closed port succeeded"),
    }
    Ok(())
}

#[test]
fn from_config_resolves_endpoint() -> anyhow::Result<()> {
    let config = ClientConfig {
        base_url: "/v2".into(),
        origin: "http://scores.internal:7000".into(),
        path_encoding: PathEncoding::Percent,
    };
    let client = ScoreClient::from_config(&config)?;
    assert_eq!(client.endpoint().scores_url(), "http://scores.internal:7000/v2/score");
    assert_eq!(client.endpoint().encoding(), PathEncoding::Percent);
    Ok(())
}

#[test]
fn from_config_rejects_relative_base_without_origin() {
    let config = ClientConfig {
        base_url: "/api".into(),
        origin: String::new(),
        path_encoding: PathEncoding::Verbatim,
    };
    let err = ScoreClient::from_config(&config).err();
    assert!(matches!(err, Some(ScoreError::InvalidEndpoint(_))));
}
