//! Stat scope: career aggregate or a single season.

use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which hitting totals to request from the Stats API.
///
/// Maps directly onto the upstream `stats=` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatScope {
    #[default]
    Career,
    Season,
}

impl StatScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatScope::Career => "career",
            StatScope::Season => "season",
        }
    }

    /// Parse optional form/query input; a missing or blank value means career.
    pub fn from_input(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(StatScope::Career),
            Some(s) => s.parse(),
        }
    }
}

impl fmt::Display for StatScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatScope {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "career" => Ok(StatScope::Career),
            "season" => Ok(StatScope::Season),
            other => Err(LookupError::validation(format!(
                "Unknown stat scope '{other}' (expected 'career' or 'season')"
            ))),
        }
    }
}
