//! MLB Stats API client, wire types and team logo URLs.

pub mod http;
pub mod logo;
pub mod types;

pub use http::{StatsApiClient, DEFAULT_TIMEOUT, MLB_BASE_URL};
pub use logo::{build_logo_url, logo_url_for};
pub use types::{PlayerMetadata, PlayerSummary, StatRecord};
