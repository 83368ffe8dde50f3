//! TrackMatch - resolves loosely-formatted track metadata against MusicBrainz.
//!
//! Exposes two HTTP operations: `POST /search` and `POST /hydrate`. Incoming
//! titles are stripped of retailer edition noise before they are used as
//! lookup keys; resolved recordings are cached in a local SQLite store.

pub mod config;
pub mod db;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod server;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Args;
use crate::lookup::MusicBrainzService;
use crate::server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("trackmatch=info".parse().unwrap()))
        .init();

    run(args).await?;
    Ok(())
}

async fn run(args: Args) -> error::Result<()> {
    let pool = db::init_db(&db::db_url(Some(&args.db_path))).await?;
    tracing::info!(db = %args.db_path.display(), "recording store ready");

    let state = AppState {
        lookup: Arc::new(MusicBrainzService::new(pool)),
        mask_lookup_errors: args.mask_lookup_errors,
    };

    server::run(state, args.port).await
}
