use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::{
    auth::BearerToken, leaderboard::fetch_combined_leaderboard, models::AggregatedEntry,
    state::AppState,
};

pub async fn org_leaderboard_handler(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<AggregatedEntry>>, (StatusCode, String)> {
    let leaderboard = fetch_combined_leaderboard(state.core.as_ref(), &org_id, &token)
        .await
        .map_err(|e| {
            tracing::error!("Failed to build combined leaderboard for org {}: {}", org_id, e);
            e.to_response()
        })?;

    tracing::info!(
        "Combined leaderboard for org {} has {} entries",
        org_id,
        leaderboard.len()
    );
    Ok(Json(leaderboard))
}
