//! Player stats lookup from the command line.
//!
//! Runs the same workflow as the HTML front end and prints either a text
//! table or JSON. A name that matches several players prints the candidates
//! so the user can re-run with `--player-id`.

use std::fmt::Write;

use crate::{
    cli::types::{PlayerId, Season, StatScope},
    lookup::{DisplayRecord, LookupOutcome, LookupQuery, LookupWorkflow},
    mlb::{types::display_value, PlayerSummary},
    Result,
};

/// Configuration parameters for a command-line lookup.
///
/// Exactly one of `name` and `player_id` is expected; clap enforces that for
/// the binary. When both are set the id wins.
#[derive(Debug)]
pub struct PlayerStatsParams {
    pub name: Option<String>,
    pub player_id: Option<PlayerId>,
    pub scope: StatScope,
    pub season: Option<Season>,
    pub as_json: bool,
}

/// Run a lookup and print the result to stdout.
pub async fn handle_player_stats(
    workflow: &LookupWorkflow,
    params: PlayerStatsParams,
) -> Result<()> {
    let outcome = match params.player_id {
        Some(player_id) => LookupOutcome::Resolved(
            workflow
                .lookup_by_id(player_id, params.scope, params.season)
                .await?,
        ),
        None => {
            let query =
                LookupQuery::new(params.name.unwrap_or_default(), params.scope, params.season);
            workflow.lookup(&query).await?
        }
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        LookupOutcome::Resolved(record) => print!("{}", format_display_record(record)),
        LookupOutcome::SelectionRequired { query, candidates } => {
            print!("{}", format_candidates(query, candidates))
        }
    }
    Ok(())
}

pub fn format_display_record(record: &DisplayRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record.player_name);

    if let Some(meta) = &record.metadata {
        let position = meta.primary_position.as_deref().unwrap_or("-");
        let team = meta.current_team.as_deref().unwrap_or("Free agent");
        let _ = writeln!(out, "{position} | {team}");
    }

    let scope = match record.season {
        Some(season) => format!("{} {}", record.scope, season),
        None => record.scope.to_string(),
    };
    let _ = writeln!(out, "Hitting ({scope})");

    let width = record.stats.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in record.stats.iter() {
        let _ = writeln!(out, "  {key:<width$}  {}", display_value(value));
    }
    out
}

pub fn format_candidates(query: &LookupQuery, candidates: &[PlayerSummary]) -> String {
    let mut out = format!(
        "{} players match \"{}\"; re-run with --player-id:\n",
        candidates.len(),
        query.player_name
    );
    for player in candidates {
        let _ = writeln!(
            out,
            "  {:>8}  {}{}",
            player.id.to_string(),
            player.full_name,
            player
                .current_team
                .as_deref()
                .map(|t| format!(" ({t})"))
                .unwrap_or_default()
        );
    }
    out
}
