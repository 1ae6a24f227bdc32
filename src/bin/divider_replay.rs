//! Replay a recorded interaction session through the divider engine.
//!
//! Usage: `divider-replay <session.json> [settings.json]`
//!
//! The session file holds `{"config": ShelfConfig, "events": [InteractionEvent]}`.
//! Effects are logged as they happen and the final snapshot is printed as
//! JSON on stdout. Set `RUST_LOG=shelfwright=debug` to trace transitions.

use anyhow::{Context, Result};
use serde::Deserialize;
use shelfwright::input::{DividerMachine, InteractionEvent};
use shelfwright::{InteractionSettings, ShelfConfig};
use std::fs;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct Session {
    config: ShelfConfig,
    events: Vec<InteractionEvent>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let session_path = args
        .next()
        .context("usage: divider-replay <session.json> [settings.json]")?;

    let settings = match args.next() {
        Some(path) => InteractionSettings::load(&path)
            .with_context(|| format!("Failed to load settings from {path}"))?,
        None => InteractionSettings::default(),
    };

    let content = fs::read_to_string(&session_path)
        .with_context(|| format!("Failed to read session {session_path}"))?;
    let session: Session = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse session {session_path}"))?;
    session
        .config
        .validate()
        .context("Session shelf config is invalid")?;

    let mut machine = DividerMachine::with_settings(session.config, settings);
    let total = session.events.len();
    for event in session.events {
        for effect in machine.send(event) {
            tracing::info!(?effect, "Effect");
        }
    }
    tracing::info!(events = total, state = %machine.state(), "Replay finished");

    let snapshot = serde_json::to_string_pretty(&machine.snapshot())?;
    println!("{snapshot}");
    Ok(())
}
