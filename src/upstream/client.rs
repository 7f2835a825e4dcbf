use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    errors::AppError,
    models::{Organization, Track, TrackEntry},
    upstream::CoreApi,
};

/// HTTP implementation of [`CoreApi`] backed by a shared `reqwest` client.
pub struct HttpCoreApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCoreApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .expect("Failed to build reqwest client"),
            base_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);

        let res = self.client.get(&url).bearer_auth(token).send().await?;

        let status = res.status();
        if !status.is_success() {
            // The core API reports failures as {"error": "..."}
            let message = res
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| format!("GET {} returned {}", path, status));

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AppError::Unauthorized(message)
                }
                StatusCode::NOT_FOUND => AppError::NotFound(message),
                _ => AppError::Upstream(message),
            });
        }

        res.json::<T>()
            .await
            .map_err(|e| AppError::Deserialization(format!("Invalid JSON from {}: {}", path, e)))
    }
}

#[derive(Deserialize)]
struct OrganizationsEnvelope {
    #[serde(default)]
    organizations: Vec<Organization>,
}

#[derive(Deserialize)]
struct OrganizationEnvelope {
    organization: Option<Organization>,
    data: Option<Organization>,
}

// Track listings come back either wrapped in a data field or as a bare
// array, depending on the core API version.
#[derive(Deserialize)]
#[serde(untagged)]
enum OrgTracksEnvelope {
    Wrapped {
        #[serde(default)]
        data: Vec<Track>,
    },
    Bare(Vec<Track>),
}

#[derive(Deserialize)]
struct MyTracksEnvelope {
    #[serde(default)]
    tracks: Vec<Track>,
}

#[derive(Deserialize)]
struct TrackEnvelope {
    track: Option<Track>,
    data: Option<Track>,
}

#[derive(Deserialize)]
struct LeaderboardEnvelope {
    #[serde(default)]
    leaderboard: Vec<TrackEntry>,
}

#[async_trait]
impl CoreApi for HttpCoreApi {
    async fn list_organizations(&self, token: &str) -> Result<Vec<Organization>, AppError> {
        let envelope: OrganizationsEnvelope = self.get_json("/api/organizations", token).await?;
        Ok(envelope.organizations)
    }

    async fn get_organization(
        &self,
        org_id: &str,
        token: &str,
    ) -> Result<Organization, AppError> {
        let path = format!("/api/organizations/{}", org_id);
        let envelope: OrganizationEnvelope = self.get_json(&path, token).await?;

        envelope
            .data
            .or(envelope.organization)
            .ok_or_else(|| AppError::Deserialization(format!("No organization in {}", path)))
    }

    async fn list_org_tracks(&self, org_id: &str, token: &str) -> Result<Vec<Track>, AppError> {
        let path = format!("/api/tracks/org/{}", org_id);
        let envelope: OrgTracksEnvelope = self.get_json(&path, token).await?;

        Ok(match envelope {
            OrgTracksEnvelope::Wrapped { data } => data,
            OrgTracksEnvelope::Bare(tracks) => tracks,
        })
    }

    async fn list_my_tracks(&self, token: &str) -> Result<Vec<Track>, AppError> {
        let envelope: MyTracksEnvelope = self.get_json("/api/tracks/my-tracks", token).await?;
        Ok(envelope.tracks)
    }

    async fn get_track(&self, track_id: &str, token: &str) -> Result<Track, AppError> {
        let path = format!("/api/tracks/{}", track_id);
        let envelope: TrackEnvelope = self.get_json(&path, token).await?;

        envelope
            .track
            .or(envelope.data)
            .ok_or_else(|| AppError::Deserialization(format!("No track in {}", path)))
    }

    async fn get_track_leaderboard(
        &self,
        track_id: &str,
        token: &str,
    ) -> Result<Vec<TrackEntry>, AppError> {
        let path = format!("/api/tracks/{}/leaderboard", track_id);
        let envelope: LeaderboardEnvelope = self.get_json(&path, token).await?;
        Ok(envelope.leaderboard)
    }
}
