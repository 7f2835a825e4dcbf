use serde::{Deserialize, Serialize};

fn default_multiplier() -> f64 {
    1.0
}

/// One row of a single track's leaderboard, as served by the core API.
/// Missing fields decode to defaults: 0 for scores and streaks, 1.0 for
/// the multiplier, empty string for names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEntry {
    #[serde(default)]
    pub rank: u64,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default = "default_multiplier")]
    pub streak_multiplier: f64,
}

/// One user's combined standing across all tracks of an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedEntry {
    pub rank: u64,
    pub user_id: String,
    pub user_name: String,
    pub base_score: f64,
    pub total_score: f64,
    pub current_streak: u32,
    pub streak_multiplier: f64,
}

impl AggregatedEntry {
    /// Score as clients display it. Accumulation stays in floating point;
    /// rounding happens only at presentation time.
    pub fn display_score(&self) -> i64 {
        self.total_score.round() as i64
    }
}
