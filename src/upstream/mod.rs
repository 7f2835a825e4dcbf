pub mod client;

pub use client::HttpCoreApi;

use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::{Organization, Track, TrackEntry},
};

/// Read surface of the core API. The token is the acting user's bearer
/// credential, forwarded verbatim; the core API decides what the user may
/// see. Abstracted as a trait so tests can swap in a mock.
#[async_trait]
pub trait CoreApi: Send + Sync {
    async fn list_organizations(&self, token: &str) -> Result<Vec<Organization>, AppError>;

    async fn get_organization(&self, org_id: &str, token: &str)
    -> Result<Organization, AppError>;

    /// Tracks of an organization, in the core API's listing order.
    /// Combined leaderboards aggregate in exactly this order.
    async fn list_org_tracks(&self, org_id: &str, token: &str) -> Result<Vec<Track>, AppError>;

    async fn list_my_tracks(&self, token: &str) -> Result<Vec<Track>, AppError>;

    async fn get_track(&self, track_id: &str, token: &str) -> Result<Track, AppError>;

    /// One track's leaderboard, entries in upstream rank order.
    async fn get_track_leaderboard(
        &self,
        track_id: &str,
        token: &str,
    ) -> Result<Vec<TrackEntry>, AppError>;
}
