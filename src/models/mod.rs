pub mod leaderboard;
pub mod organization;
pub mod track;

pub use leaderboard::{AggregatedEntry, TrackEntry};
pub use organization::Organization;
pub use track::Track;
