//! MLB Hitter Lookup Library
//!
//! Looks up Major League Baseball hitting statistics by player name through
//! the public MLB Stats API and renders them as HTML or text.
//!
//! ## Features
//!
//! - **Player Search**: Name search with disambiguation when several players match
//! - **Career or Season Stats**: Hitting totals for a career or a single season
//! - **Player Details**: Position, current team and team logo
//! - **HTML Front End**: A small axum server with search, selection and result pages
//! - **CLI**: The same lookup from the terminal, as text or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_hitter_lookup::{
//!     lookup::{LookupOutcome, LookupQuery, LookupWorkflow},
//!     mlb::StatsApiClient,
//!     Config, StatScope,
//! };
//!
//! # async fn example() -> mlb_hitter_lookup::Result<()> {
//! let client = StatsApiClient::from_config(&Config::default())?;
//! let workflow = LookupWorkflow::from_client(client);
//!
//! let query = LookupQuery::new("Aaron Judge", StatScope::Career, None);
//! match workflow.lookup(&query).await? {
//!     LookupOutcome::Resolved(record) => {
//!         println!("{}: {:?}", record.player_name, record.stats.get("avg"))
//!     }
//!     LookupOutcome::SelectionRequired { candidates, .. } => {
//!         println!("{} matches, pick one by id", candidates.len())
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MLB_LOOKUP_BIND=0.0.0.0:8080
//! export MLB_API_BASE_URL=https://statsapi.mlb.com/api/v1
//! export MLB_HTTP_TIMEOUT_SECS=10
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod mlb;
pub mod web;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, StatScope, TeamId};
pub use config::Config;
pub use error::{LookupError, Result};
pub use lookup::{DisplayRecord, LookupOutcome, LookupQuery, LookupWorkflow};
pub use mlb::{build_logo_url, PlayerMetadata, PlayerSummary, StatRecord, StatsApiClient};
