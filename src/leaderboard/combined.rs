use futures::{StreamExt, stream};

use crate::{
    errors::AppError,
    leaderboard::aggregate::aggregate_track_leaderboards,
    models::{AggregatedEntry, TrackEntry},
    upstream::CoreApi,
};

// Upper bound on concurrent upstream leaderboard fetches per request.
const FETCH_CONCURRENCY: usize = 4;

/// Build the combined leaderboard for an organization: fetch every track's
/// leaderboard from the core API, then merge and rank.
///
/// Fetches run concurrently (at most [`FETCH_CONCURRENCY`] in flight) but
/// `buffered` yields them in track-listing order, so the aggregation input
/// does not depend on which response lands first. Failing the track listing
/// fails the whole view; a failing leaderboard fetch only empties that
/// track's contribution.
pub async fn fetch_combined_leaderboard(
    core: &dyn CoreApi,
    org_id: &str,
    token: &str,
) -> Result<Vec<AggregatedEntry>, AppError> {
    let tracks = core.list_org_tracks(org_id, token).await?;

    let per_track: Vec<(String, Vec<TrackEntry>)> = stream::iter(tracks)
        .map(|track| async move {
            let entries = leaderboard_or_empty(core, &track.id, token).await;
            (track.id, entries)
        })
        .buffered(FETCH_CONCURRENCY)
        .collect()
        .await;

    Ok(aggregate_track_leaderboards(per_track))
}

/// Fetch one track's leaderboard, degrading to an empty board when the
/// core API fails. Entries keep the rank the core API assigned.
pub async fn leaderboard_or_empty(
    core: &dyn CoreApi,
    track_id: &str,
    token: &str,
) -> Vec<TrackEntry> {
    match core.get_track_leaderboard(track_id, token).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to get leaderboard for track {}: {}", track_id, e);
            Vec::new()
        }
    }
}
