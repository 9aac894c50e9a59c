//! Player lookup workflow: search, disambiguate, fetch, assemble.
//!
//! A name lookup ends in one of these states:
//!
//! - blank name: [`LookupError::Validation`], no network call is made
//! - no search hits: [`LookupError::NotFound`]
//! - several hits: [`LookupOutcome::SelectionRequired`] with the candidates in
//!   the order the API returned them; the caller picks one and comes back
//!   through [`LookupWorkflow::lookup_by_id`]
//! - one hit (or a caller-chosen id): stats and metadata are fetched
//!   concurrently and assembled into a [`DisplayRecord`], unless the API has no
//!   stat line, which is [`LookupError::NoStats`]
//!
//! Nothing is kept between the two entry points beyond what the caller
//! passes back in.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    cli::types::{PlayerId, Season, StatScope},
    error::{LookupError, Result},
    mlb::{logo_url_for, PlayerMetadata, PlayerSummary, StatRecord, StatsApiClient},
};


pub const EMPTY_NAME_MESSAGE: &str = "Please enter a player name.";

/// The three upstream reads the workflow needs.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn search_by_name(&self, name: &str) -> Result<Vec<PlayerSummary>>;

    async fn fetch_stats(
        &self,
        player_id: PlayerId,
        scope: StatScope,
        season: Option<Season>,
    ) -> Result<Option<StatRecord>>;

    async fn fetch_metadata(&self, player_id: PlayerId) -> Result<Option<PlayerMetadata>>;
}

#[async_trait]
impl StatsSource for StatsApiClient {
    async fn search_by_name(&self, name: &str) -> Result<Vec<PlayerSummary>> {
        StatsApiClient::search_by_name(self, name).await
    }

    async fn fetch_stats(
        &self,
        player_id: PlayerId,
        scope: StatScope,
        season: Option<Season>,
    ) -> Result<Option<StatRecord>> {
        StatsApiClient::fetch_stats(self, player_id, scope, season).await
    }

    async fn fetch_metadata(&self, player_id: PlayerId) -> Result<Option<PlayerMetadata>> {
        StatsApiClient::fetch_metadata(self, player_id).await
    }
}

/// A name lookup as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupQuery {
    pub player_name: String,
    pub scope: StatScope,
    pub season: Option<Season>,
}

impl LookupQuery {
    /// `season` is dropped unless `scope` is [`StatScope::Season`].
    pub fn new(player_name: impl Into<String>, scope: StatScope, season: Option<Season>) -> Self {
        Self {
            player_name: player_name.into(),
            scope,
            season: season_for_scope(scope, season),
        }
    }
}

pub fn season_for_scope(scope: StatScope, season: Option<Season>) -> Option<Season> {
    match scope {
        StatScope::Season => season,
        StatScope::Career => None,
    }
}

/// Everything the result page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub player_name: String,
    pub metadata: Option<PlayerMetadata>,
    pub team_logo_url: Option<String>,
    pub stats: StatRecord,
    pub scope: StatScope,
    pub season: Option<Season>,
}

impl DisplayRecord {
    /// Assemble from fetched parts. The stat record is moved in whole.
    pub fn assemble(
        player_id: PlayerId,
        stats: StatRecord,
        metadata: Option<PlayerMetadata>,
        scope: StatScope,
        season: Option<Season>,
    ) -> Self {
        let player_name = metadata
            .as_ref()
            .map(|m| m.full_name.clone())
            .unwrap_or_else(|| format!("Player {player_id}"));
        let team_logo_url = logo_url_for(metadata.as_ref().and_then(|m| m.team_id));

        Self {
            player_name,
            metadata,
            team_logo_url,
            stats,
            scope,
            season: season_for_scope(scope, season),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    SelectionRequired {
        query: LookupQuery,
        candidates: Vec<PlayerSummary>,
    },
    Resolved(DisplayRecord),
}

/// Result of the search step on its own
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Unique(PlayerSummary),
    Ambiguous(Vec<PlayerSummary>),
}

#[derive(Clone)]
pub struct LookupWorkflow {
    source: Arc<dyn StatsSource>,
}

impl LookupWorkflow {
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        Self { source }
    }

    pub fn from_client(client: StatsApiClient) -> Self {
        Self::new(Arc::new(client))
    }

    /// Search by name and report whether the hit is unique.
    pub async fn search(&self, raw_name: &str) -> Result<SearchOutcome> {
        let name = validate_player_name(raw_name)?;

        let mut matches = self.source.search_by_name(name).await?;
        debug!(name, matches = matches.len(), "player search");

        match matches.len() {
            0 => Err(LookupError::NotFound {
                name: name.to_string(),
            }),
            1 => Ok(SearchOutcome::Unique(matches.remove(0))),
            _ => Ok(SearchOutcome::Ambiguous(matches)),
        }
    }

    /// Search by name and either resolve or ask the caller to pick.
    pub async fn lookup(&self, query: &LookupQuery) -> Result<LookupOutcome> {
        match self.search(&query.player_name).await? {
            SearchOutcome::Unique(player) => {
                let record = self
                    .lookup_by_id(player.id, query.scope, query.season)
                    .await?;
                Ok(LookupOutcome::Resolved(record))
            }
            SearchOutcome::Ambiguous(candidates) => Ok(LookupOutcome::SelectionRequired {
                query: LookupQuery::new(query.player_name.trim(), query.scope, query.season),
                candidates,
            }),
        }
    }

    /// Fetch stats and metadata for a known player.
    pub async fn lookup_by_id(
        &self,
        player_id: PlayerId,
        scope: StatScope,
        season: Option<Season>,
    ) -> Result<DisplayRecord> {
        let season = season_for_scope(scope, season);

        let (stats, metadata) = tokio::join!(
            self.source.fetch_stats(player_id, scope, season),
            self.source.fetch_metadata(player_id),
        );

        let stats = stats
            .inspect_err(|e| warn!(%player_id, error = %e, "stats fetch failed"))?
            .ok_or(LookupError::NoStats { player_id })?;
        let metadata =
            metadata.inspect_err(|e| warn!(%player_id, error = %e, "metadata fetch failed"))?;

        Ok(DisplayRecord::assemble(player_id, stats, metadata, scope, season))
    }
}

/// Trimmed name, or a validation error when nothing is left.
pub fn validate_player_name(raw: &str) -> Result<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(LookupError::validation(EMPTY_NAME_MESSAGE));
    }
    Ok(name)
}
