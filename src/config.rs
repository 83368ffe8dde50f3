//! Runtime configuration.
//!
//! Settings come from command-line flags, each doubling as an environment
//! variable for container deployments. Defaults match the documented
//! contract: `trackmatch.db` next to the binary and port 8088.

use std::path::PathBuf;

use clap::Parser;

use crate::db::DEFAULT_DB_NAME;

/// Track metadata resolution service backed by MusicBrainz.
#[derive(Debug, Parser)]
#[command(name = "trackmatch", version)]
pub struct Args {
    /// SQLite database file backing the recording store
    #[arg(long, env = "DB_PATH", default_value = DEFAULT_DB_NAME)]
    pub db_path: PathBuf,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8088)]
    pub port: u16,

    /// Answer 200 with a zero-valued body instead of 502 when the lookup
    /// backend fails (legacy wire contract)
    #[arg(long, env = "MASK_LOOKUP_ERRORS")]
    pub mask_lookup_errors: bool,
}
