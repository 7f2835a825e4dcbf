pub mod leaderboard;
pub mod organization;
pub mod track;

pub use leaderboard::org_leaderboard_handler;

pub use organization::{get_organization_handler, list_organizations_handler};

pub use track::{
    get_track_handler, list_my_tracks_handler, list_org_tracks_handler,
    track_leaderboard_handler,
};
