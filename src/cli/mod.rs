//! CLI argument definitions and parsing.

pub mod types;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};
use types::{PlayerId, Season, StatScope};

/// Upstream API settings shared by every command
#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Stats API base URL (or set `MLB_API_BASE_URL`).
    #[clap(long, global = true)]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds (or set `MLB_HTTP_TIMEOUT_SECS`).
    #[clap(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Look up a hitter's stats by name or by MLB person id.
    ///
    /// A name that matches several players prints the candidates; re-run
    /// with `--player-id` to pick one.
    PlayerStats {
        /// Player name to search for.
        #[clap(
            long,
            short = 'n',
            required_unless_present = "player_id",
            conflicts_with = "player_id"
        )]
        name: Option<String>,

        /// MLB person id, skips the name search.
        #[clap(long)]
        player_id: Option<PlayerId>,

        /// career | season
        #[clap(long, default_value_t = StatScope::default())]
        scope: StatScope,

        /// Season year (only used with `--scope season`).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-hitter-lookup", about = "MLB hitter stats lookup")]
pub struct App {
    #[clap(flatten)]
    pub api: ApiArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTML lookup server
    Serve {
        /// Address to listen on (or set `MLB_LOOKUP_BIND`).
        #[clap(long, short)]
        bind: Option<SocketAddr>,
    },

    /// Query the Stats API from the command line
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
