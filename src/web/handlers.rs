//! Route handlers. Each one parses its input, runs one step of the lookup
//! workflow and picks a page.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::warn;

use super::{
    pages,
    params::{
        parse_selected_id, player_url, scope_and_season, SearchForm, SelectForm, StatsParams,
    },
    AppState,
};
use crate::{
    cli::types::PlayerId,
    error::LookupError,
    lookup::{LookupQuery, SearchOutcome},
};

pub const NO_SELECTION_MESSAGE: &str = "No player selected.";
pub const NO_STATS_MESSAGE: &str = "No stats available for this player/scope/season.";

pub async fn home() -> Html<String> {
    Html(pages::home_page(None))
}

pub async fn health() -> &'static str {
    "ok"
}

/// `POST /player`: search, then redirect on a unique hit or show candidates.
pub async fn player_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Response {
    let (scope, season) = match scope_and_season(form.scope.as_deref(), form.season.as_deref()) {
        Ok(parsed) => parsed,
        Err(e) => return home_with_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.workflow.search(&form.player_name).await {
        Ok(SearchOutcome::Unique(player)) => {
            Redirect::to(&player_url(player.id, scope, season)).into_response()
        }
        Ok(SearchOutcome::Ambiguous(candidates)) => {
            let query = LookupQuery::new(form.player_name.trim(), scope, season);
            Html(pages::select_player_page(&query, &candidates)).into_response()
        }
        Err(e) if e.is_upstream() => {
            warn!(error = %e, "player search failed");
            home_with_error(
                StatusCode::BAD_GATEWAY,
                &format!("Error searching players: {e}"),
            )
        }
        Err(e) => home_with_error(StatusCode::OK, &e.to_string()),
    }
}

/// `POST /player/select`: the caller picked one candidate.
pub async fn player_selected(Form(form): Form<SelectForm>) -> Response {
    let Some(player_id) = parse_selected_id(form.player_id.as_deref()) else {
        return home_with_error(StatusCode::OK, NO_SELECTION_MESSAGE);
    };

    match scope_and_season(form.scope.as_deref(), form.season.as_deref()) {
        Ok((scope, season)) => Redirect::to(&player_url(player_id, scope, season)).into_response(),
        Err(e) => home_with_error(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

/// `GET /player/{id}?scope=&season=`
pub async fn player_by_id(
    State(state): State<AppState>,
    Path(player_id): Path<u32>,
    Query(params): Query<StatsParams>,
) -> Response {
    let player_id = PlayerId::new(player_id);
    let (scope, season) = match scope_and_season(params.scope.as_deref(), params.season.as_deref())
    {
        Ok(parsed) => parsed,
        Err(e) => return player_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.workflow.lookup_by_id(player_id, scope, season).await {
        Ok(record) => Html(pages::player_page(&record)).into_response(),
        Err(LookupError::NoStats { .. }) => player_error(StatusCode::NOT_FOUND, NO_STATS_MESSAGE),
        Err(e) if e.is_upstream() => player_error(
            StatusCode::BAD_GATEWAY,
            &format!("Error fetching stats: {e}"),
        ),
        Err(e) => player_error(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

fn home_with_error(status: StatusCode, message: &str) -> Response {
    (status, Html(pages::home_page(Some(message)))).into_response()
}

fn player_error(status: StatusCode, message: &str) -> Response {
    (status, Html(pages::player_error_page(message))).into_response()
}
