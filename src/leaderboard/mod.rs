pub mod aggregate;
pub mod combined;

pub use aggregate::aggregate_track_leaderboards;
pub use combined::{fetch_combined_leaderboard, leaderboard_or_empty};
