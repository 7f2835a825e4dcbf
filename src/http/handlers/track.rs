use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::{
    auth::BearerToken,
    leaderboard::leaderboard_or_empty,
    models::{Track, TrackEntry},
    state::AppState,
    upstream::CoreApi,
};

pub async fn list_org_tracks_handler(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<Track>>, (StatusCode, String)> {
    let tracks = state
        .core
        .list_org_tracks(&org_id, &token)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list tracks for org {}: {}", org_id, e);
            e.to_response()
        })?;

    tracing::info!("Retrieved {} tracks for org {}", tracks.len(), org_id);
    Ok(Json(tracks))
}

pub async fn list_my_tracks_handler(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<Track>>, (StatusCode, String)> {
    let tracks = state.core.list_my_tracks(&token).await.map_err(|e| {
        tracing::error!("Failed to list the user's tracks: {}", e);
        e.to_response()
    })?;

    tracing::info!("Retrieved {} joined tracks", tracks.len());
    Ok(Json(tracks))
}

pub async fn get_track_handler(
    State(state): State<AppState>,
    Path(track_id): Path<String>,
    BearerToken(token): BearerToken,
) -> Result<Json<Track>, (StatusCode, String)> {
    let track = state.core.get_track(&track_id, &token).await.map_err(|e| {
        tracing::error!("Failed to get track {}: {}", track_id, e);
        e.to_response()
    })?;

    tracing::info!("Retrieved track info for {}", track_id);
    Ok(Json(track))
}

// Single-track boards are served exactly as the core API ranked them; only
// combined views recompute ranks.
pub async fn track_leaderboard_handler(
    State(state): State<AppState>,
    Path(track_id): Path<String>,
    BearerToken(token): BearerToken,
) -> Json<Vec<TrackEntry>> {
    let entries = leaderboard_or_empty(state.core.as_ref(), &track_id, &token).await;

    Json(entries)
}
