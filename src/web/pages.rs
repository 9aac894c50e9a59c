//! Server-rendered HTML pages.
//!
//! Everything that came from the user or the Stats API goes through
//! [`escape_html`] before it is written into markup.

use std::fmt::Write;

use crate::{
    cli::types::{Season, StatScope},
    lookup::{DisplayRecord, LookupQuery},
    mlb::{types::display_value, PlayerSummary},
};

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem auto;max-width:48rem;\
background:#0b1d33;color:#eef2f7}a{color:#9cc9ff}table{border-collapse:collapse}\
td,th{padding:.25rem .75rem;border-bottom:1px solid #2b4466;text-align:left}\
.error{color:#ff8a8a}img.logo{height:4rem}";

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_html(title)
    )
}

fn error_block(error: Option<&str>) -> String {
    error
        .map(|e| format!("<p class=\"error\">{}</p>\n", escape_html(e)))
        .unwrap_or_default()
}

fn scope_label(scope: StatScope, season: Option<Season>) -> String {
    match (scope, season) {
        (StatScope::Season, Some(season)) => format!("{season} season"),
        (StatScope::Season, None) => "Current season".to_string(),
        (StatScope::Career, _) => "Career".to_string(),
    }
}

fn hidden_scope_fields(scope: StatScope, season: Option<Season>) -> String {
    let season = season.map(|s| s.to_string()).unwrap_or_default();
    format!(
        "<input type=\"hidden\" name=\"scope\" value=\"{scope}\">\n\
         <input type=\"hidden\" name=\"season\" value=\"{season}\">\n"
    )
}

/// `GET /`, also used to report search errors.
pub fn home_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>MLB Hitter Lookup</h1>\n{}\
         <form method=\"post\" action=\"/player\">\n\
         <label>Player name <input type=\"text\" name=\"player_name\" autofocus></label>\n\
         <label>Scope <select name=\"scope\">\
         <option value=\"career\">Career</option>\
         <option value=\"season\">Season</option></select></label>\n\
         <label>Season <input type=\"text\" name=\"season\" inputmode=\"numeric\" \
         placeholder=\"e.g. 2024\"></label>\n\
         <button type=\"submit\">Look up</button>\n</form>",
        error_block(error)
    );
    layout("MLB Hitter Lookup", &body)
}

/// Candidate list shown when a name matches more than one player.
pub fn select_player_page(query: &LookupQuery, candidates: &[PlayerSummary]) -> String {
    let mut body = format!(
        "<h1>Several players match \"{}\"</h1>\n\
         <form method=\"post\" action=\"/player/select\">\n{}<ul>\n",
        escape_html(&query.player_name),
        hidden_scope_fields(query.scope, query.season)
    );

    for (i, player) in candidates.iter().enumerate() {
        let team = player
            .current_team
            .as_deref()
            .map(|t| format!(" ({})", escape_html(t)))
            .unwrap_or_default();
        let checked = if i == 0 { " checked" } else { "" };
        let _ = writeln!(
            body,
            "<li><label><input type=\"radio\" name=\"player_id\" value=\"{}\"{checked}> \
             {}{team} <small>#{}</small></label></li>",
            player.id,
            escape_html(&player.full_name),
            player.id
        );
    }

    body.push_str("</ul>\n<button type=\"submit\">Show stats</button>\n</form>\n");
    body.push_str("<p><a href=\"/\">New search</a></p>");
    layout("Select a player", &body)
}

/// Result page for a resolved lookup.
pub fn player_page(record: &DisplayRecord) -> String {
    let mut body = String::new();

    if let Some(logo) = &record.team_logo_url {
        let _ = writeln!(
            body,
            "<img class=\"logo\" src=\"{}\" alt=\"team logo\">",
            escape_html(logo)
        );
    }
    let _ = writeln!(body, "<h1>{}</h1>", escape_html(&record.player_name));

    if let Some(meta) = &record.metadata {
        let position = meta.primary_position.as_deref().unwrap_or("-");
        let team = meta.current_team.as_deref().unwrap_or("Free agent");
        let _ = writeln!(
            body,
            "<p>{} &middot; {}</p>",
            escape_html(position),
            escape_html(team)
        );
    }

    let _ = writeln!(
        body,
        "<h2>{} hitting</h2>\n<table>\n<tr><th>Stat</th><th>Value</th></tr>",
        escape_html(&scope_label(record.scope, record.season))
    );
    for (key, value) in record.stats.iter() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(key),
            escape_html(&display_value(value))
        );
    }
    body.push_str("</table>\n<p><a href=\"/\">New search</a></p>");

    layout(&record.player_name, &body)
}

/// Result page when the lookup did not resolve.
pub fn player_error_page(message: &str) -> String {
    let body = format!(
        "<h1>Player stats</h1>\n{}<p><a href=\"/\">New search</a></p>",
        error_block(Some(message))
    );
    layout("Player stats", &body)
}
