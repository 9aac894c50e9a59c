use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, Season, StatScope},
    config::Config,
    error::{LookupError, Result},
    mlb::types::{PeopleEnvelope, PlayerMetadata, PlayerSummary, StatRecord, StatsEnvelope},
};


/// Base path for the MLB Stats API v1.
pub const MLB_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

/// Per-request timeout applied to every upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("mlb-hitter-lookup/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the three Stats API endpoints we use.
///
/// Every call goes to the network; there is no retry and no caching.
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    client: Client,
    base_url: String,
}

impl StatsApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.http_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /people/search?names={name}`
    ///
    /// Results keep the order the API returned them in.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<PlayerSummary>> {
        let url = format!("{}/people/search", self.base_url);
        let params = [("names", name.to_string())];

        let envelope: PeopleEnvelope = self.get_json(&url, &params).await?;
        Ok(envelope.people.into_iter().map(PlayerSummary::from).collect())
    }

    /// `GET /people/{id}/stats?stats={scope}&group=hitting[&season={season}]`
    ///
    /// `Ok(None)` means the player exists but the API has no stat line for
    /// this scope/season.
    pub async fn fetch_stats(
        &self,
        player_id: PlayerId,
        scope: StatScope,
        season: Option<Season>,
    ) -> Result<Option<StatRecord>> {
        let url = format!("{}/people/{}/stats", self.base_url, player_id);
        let params = stats_query_params(scope, season);

        let envelope: StatsEnvelope = self.get_json(&url, &params).await?;
        Ok(envelope.into_stat_record(player_id))
    }

    /// `GET /people/{id}`
    pub async fn fetch_metadata(&self, player_id: PlayerId) -> Result<Option<PlayerMetadata>> {
        let url = format!("{}/people/{}", self.base_url, player_id);

        let envelope: PeopleEnvelope = self.get_json(&url, &[]).await?;
        Ok(envelope.people.into_iter().next().map(PlayerMetadata::from))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        debug!(url, ?params, "stats api request");

        let res = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| LookupError::upstream(format!("request to {url} failed: {e}")))?;

        let status = res.status();
        if !status.is_success() {
            return Err(LookupError::upstream(format!("{url} returned {status}")));
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| LookupError::upstream(format!("reading body from {url} failed: {e}")))?;

        serde_json::from_slice(&body)
            .map_err(|e| LookupError::upstream(format!("malformed response from {url}: {e}")))
    }
}

/// Query parameters for the stats endpoint.
///
/// `season` is only sent for single-season lookups.
pub fn stats_query_params(scope: StatScope, season: Option<Season>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("stats", scope.as_str().to_string()),
        ("group", "hitting".to_string()),
    ];
    if let (StatScope::Season, Some(season)) = (scope, season) {
        params.push(("season", season.to_string()));
    }
    params
}
