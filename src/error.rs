//! Error types for the MLB hitter lookup

use thiserror::Error;

use crate::cli::types::PlayerId;


pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("{message}")]
    Validation { message: String },

    #[error("No matching players found for \"{name}\"")]
    NotFound { name: String },

    #[error("No stats available for player {player_id}")]
    NoStats { player_id: PlayerId },

    #[error("Stats API error: {message}")]
    Upstream { message: String },
}

impl LookupError {
    pub fn validation(message: impl Into<String>) -> Self {
        LookupError::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        LookupError::Upstream {
            message: message.into(),
        }
    }

    /// True for transport and decoding failures coming from the stats API,
    /// as opposed to the "no data" outcomes.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            LookupError::Http(_) | LookupError::Json(_) | LookupError::Upstream { .. }
        )
    }
}
