//! Command implementations for the MLB hitter lookup CLI

pub mod player_stats;
pub mod serve;

use crate::{config::Config, lookup::LookupWorkflow, mlb::StatsApiClient, Result};

/// Build the lookup workflow against the configured Stats API.
pub fn build_workflow(config: &Config) -> Result<LookupWorkflow> {
    let client = StatsApiClient::from_config(config)?;
    Ok(LookupWorkflow::from_client(client))
}
