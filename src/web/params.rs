//! Form and query-string input for the HTML routes.

use serde::Deserialize;

use crate::cli::types::{PlayerId, Season, StatScope};
use crate::lookup::season_for_scope;
use crate::Result;

/// `POST /player`
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub player_name: String,
    pub scope: Option<String>,
    pub season: Option<String>,
}

/// `POST /player/select`
#[derive(Debug, Default, Deserialize)]
pub struct SelectForm {
    pub player_id: Option<String>,
    pub scope: Option<String>,
    pub season: Option<String>,
}

/// `GET /player/{id}` query string
#[derive(Debug, Default, Deserialize)]
pub struct StatsParams {
    pub scope: Option<String>,
    pub season: Option<String>,
}

/// Missing scope means career; a season that is not all digits is ignored,
/// as is any season on a career lookup.
pub fn scope_and_season(
    scope: Option<&str>,
    season: Option<&str>,
) -> Result<(StatScope, Option<Season>)> {
    let scope = StatScope::from_input(scope)?;
    let season = season.and_then(Season::parse_lenient);
    Ok((scope, season_for_scope(scope, season)))
}

pub fn parse_selected_id(raw: Option<&str>) -> Option<PlayerId> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

/// Location of the result page for a player
pub fn player_url(player_id: PlayerId, scope: StatScope, season: Option<Season>) -> String {
    match season_for_scope(scope, season) {
        Some(season) => format!("/player/{player_id}?scope={scope}&season={season}"),
        None => format!("/player/{player_id}?scope={scope}"),
    }
}
