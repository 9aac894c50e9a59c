use crate::cli::types::TeamId;

/// MLB's "cap on dark" SVG logo set
pub const TEAM_LOGO_URL_BASE: &str = "https://www.mlbstatic.com/team-logos/team-cap-on-dark";

/// Format the logo URL for a team. No network call; the logo is not checked to exist.
pub fn build_logo_url(team_id: TeamId) -> String {
    format!("{TEAM_LOGO_URL_BASE}/{team_id}.svg")
}

pub fn logo_url_for(team_id: Option<TeamId>) -> Option<String> {
    team_id.map(build_logo_url)
}
