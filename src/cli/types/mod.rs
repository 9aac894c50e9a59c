//! Type-safe wrappers and enums for MLB Stats API data.

pub mod ids;
pub mod scope;
pub mod time;


pub use ids::{PlayerId, TeamId};
pub use scope::StatScope;
pub use time::Season;
