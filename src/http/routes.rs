use axum::{Router, middleware as axum_middleware, routing::get};

use crate::{
    http::handlers::{
        get_organization_handler, get_track_handler, list_my_tracks_handler,
        list_org_tracks_handler, list_organizations_handler, org_leaderboard_handler,
        track_leaderboard_handler,
    },
    middleware::{create_leaderboard_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let leaderboard_rate_limiter = create_leaderboard_rate_limiter();

    // The combined view fans out into one core API call per track, so it
    // gets its own stricter per-IP limit on top of the global one
    let combined_leaderboard = Router::new()
        .route(
            "/api/organizations/{id}/leaderboard",
            get(org_leaderboard_handler),
        )
        .route_layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(leaderboard_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .route("/api/organizations", get(list_organizations_handler))
        .route("/api/organizations/{id}", get(get_organization_handler))
        .route("/api/tracks/my-tracks", get(list_my_tracks_handler))
        .route("/api/tracks/org/{org_id}", get(list_org_tracks_handler))
        .route("/api/tracks/{id}", get(get_track_handler))
        .route("/api/tracks/{id}/leaderboard", get(track_leaderboard_handler))
        .merge(combined_leaderboard)
        .with_state(state)
}
