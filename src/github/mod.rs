//! GitHub integration for release operations

mod auth;
mod release_manager;

pub use auth::Credentials;
pub use release_manager::{
    CreatedRelease, DEFAULT_API_BASE_URL, GitHubAssetUploader, GitHubReleaseConfig,
    GitHubReleaseManager, ReleaseDraft, detect_asset_content_type,
};
