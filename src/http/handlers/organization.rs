use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::{auth::BearerToken, models::Organization, state::AppState, upstream::CoreApi};

pub async fn list_organizations_handler(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<Organization>>, (StatusCode, String)> {
    let organizations = state.core.list_organizations(&token).await.map_err(|e| {
        tracing::error!("Failed to list organizations: {}", e);
        e.to_response()
    })?;

    tracing::info!("Retrieved {} organizations", organizations.len());
    Ok(Json(organizations))
}

pub async fn get_organization_handler(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
    BearerToken(token): BearerToken,
) -> Result<Json<Organization>, (StatusCode, String)> {
    let organization = state
        .core
        .get_organization(&org_id, &token)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get organization {}: {}", org_id, e);
            e.to_response()
        })?;

    tracing::info!("Retrieved organization info for {}", org_id);
    Ok(Json(organization))
}
