use crate::cli::types::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
mod tests;

/// Envelope for both `/people/search` and `/people/{id}`
#[derive(Debug, Deserialize)]
pub struct PeopleEnvelope {
    #[serde(default)]
    pub people: Vec<Person>,
}

/// A person entry as returned by the Stats API.
///
/// `id` and `fullName` are required; a payload without them is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Option<PositionRef>,
    #[serde(rename = "currentTeam", default)]
    pub current_team: Option<TeamRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionRef {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<TeamId>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Envelope for `/people/{id}/stats`
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    #[serde(default)]
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Deserialize)]
pub struct StatGroup {
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Deserialize)]
pub struct StatSplit {
    #[serde(default)]
    pub stat: Option<Map<String, Value>>,
}

impl StatsEnvelope {
    /// Take the first split of the first stat group.
    ///
    /// Upstream may return several groups and several splits; only index 0 of
    /// each is used. Returns `None` when there is nothing to show.
    pub fn into_stat_record(self, player_id: PlayerId) -> Option<StatRecord> {
        let group = self.stats.into_iter().next()?;
        let split = group.splits.into_iter().next()?;
        let stats = split.stat.filter(|m| !m.is_empty())?;
        Some(StatRecord { player_id, stats })
    }
}

/// Search hit used for disambiguation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "currentTeam")]
    pub current_team: Option<String>,
}

impl From<Person> for PlayerSummary {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name,
            current_team: p.current_team.and_then(|t| t.name),
        }
    }
}

/// Person details shown alongside a stat line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMetadata {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "primaryPosition")]
    pub primary_position: Option<String>,
    #[serde(rename = "currentTeam")]
    pub current_team: Option<String>,
    #[serde(rename = "teamId")]
    pub team_id: Option<TeamId>,
}

impl From<Person> for PlayerMetadata {
    fn from(p: Person) -> Self {
        let (team_id, current_team) = match p.current_team {
            Some(team) => (team.id, team.name),
            None => (None, None),
        };
        Self {
            id: p.id,
            full_name: p.full_name,
            primary_position: p.primary_position.and_then(|pos| pos.abbreviation),
            current_team,
            team_id,
        }
    }
}

/// One hitting stat line, passed through untouched.
///
/// Keys keep the order the API sent them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRecord {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}

impl StatRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.stats.get(key)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.stats.iter()
    }
}

/// Render a stat value for display: strings without quotes, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
