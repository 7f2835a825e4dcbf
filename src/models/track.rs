use serde::{Deserialize, Serialize};

// Older core API track documents use `_id` and `weekNumber`; the detail
// endpoint additionally embeds the parent organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub organization: Option<TrackOrganization>,
    pub organization_name: Option<String>,
    pub member_count: Option<u32>,
    #[serde(alias = "weekNumber")]
    pub current_week: Option<u32>,
    pub is_member: Option<bool>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackOrganization {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}
