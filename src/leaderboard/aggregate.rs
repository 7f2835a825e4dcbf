use std::collections::HashMap;

use crate::models::{AggregatedEntry, TrackEntry};

/// Combine per-track leaderboards into one ranked view per user.
///
/// Input order matters: tracks must arrive in the organization's listing
/// order and entries in upstream order, so that ties resolve the same way
/// on every run.
pub fn aggregate_track_leaderboards(
    per_track: Vec<(String, Vec<TrackEntry>)>,
) -> Vec<AggregatedEntry> {
    let mut combined: Vec<AggregatedEntry> = Vec::new();
    let mut index_by_user: HashMap<String, usize> = HashMap::new();

    for (track_id, entries) in per_track {
        tracing::debug!("Aggregating {} entries from track {}", entries.len(), track_id);

        for entry in entries {
            match index_by_user.get(&entry.user_id) {
                Some(&i) => {
                    let combined_entry = &mut combined[i];
                    combined_entry.total_score += entry.total_score;
                    combined_entry.base_score += entry.base_score;

                    // A user cannot hold two streaks at once in the combined
                    // view: keep the highest streak seen, and the multiplier
                    // that came with it.
                    if entry.current_streak > combined_entry.current_streak {
                        combined_entry.current_streak = entry.current_streak;
                        combined_entry.streak_multiplier = entry.streak_multiplier;
                    }
                }
                None => {
                    index_by_user.insert(entry.user_id.clone(), combined.len());
                    combined.push(AggregatedEntry {
                        rank: 0, // Will be set after sorting
                        user_id: entry.user_id,
                        user_name: entry.user_name,
                        base_score: entry.base_score,
                        total_score: entry.total_score,
                        current_streak: entry.current_streak,
                        streak_multiplier: entry.streak_multiplier,
                    });
                }
            }
        }
    }

    // Sort by total_score (descending). Vec::sort_by is stable, so users
    // with equal scores keep their first-seen order.
    combined.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Assign ranks
    for (index, entry) in combined.iter_mut().enumerate() {
        entry.rank = (index + 1) as u64;
    }

    combined
}
