//! GitHub Release management: create the release, upload its assets

use super::auth::{Credentials, default_headers};
use crate::assets::ReleaseAsset;
use crate::error::{ConfigError, ReleaseCreationError, Result, UploadError};
use crate::publish::ReleaseApi;
use crate::source::RepositoryRef;
use crate::upload::{AssetUploader, UploadedAsset};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API endpoint for github.com
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com/";

const USER_AGENT: &str = concat!("kodegen-release-publisher/", env!("CARGO_PKG_VERSION"));

/// Request body for creating a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDraft {
    /// Tag to create or reuse
    pub tag_name: String,
    /// Commit the tag points at if it does not exist yet
    pub target_commitish: String,
    /// Release title
    pub name: String,
    /// Release description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Create as unpublished draft
    pub draft: bool,
    /// Mark as pre-release
    pub prerelease: bool,
    /// Let the platform generate release notes
    pub generate_release_notes: bool,
}

/// Release as returned by the create call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRelease {
    /// Release ID
    pub id: u64,
    /// Release URL
    pub html_url: String,
    /// Asset upload URL template, e.g. `https://uploads.github.com/.../assets{?name,label}`
    #[serde(default)]
    pub upload_url: String,
    /// Whether this is a draft
    #[serde(default)]
    pub draft: bool,
    /// Whether this is a prerelease
    #[serde(default)]
    pub prerelease: bool,
}

/// Endpoints and credentials for the API
#[derive(Debug, Clone)]
pub struct GitHubReleaseConfig {
    /// API credentials
    pub credentials: Credentials,
    /// Base URL of the REST API, ending in `/`
    pub api_base_url: Url,
    /// Base URL for asset uploads; the release's own `upload_url` when unset
    pub upload_base_url: Option<Url>,
}

/// GitHub release manager
pub struct GitHubReleaseManager {
    http: reqwest::Client,
    config: GitHubReleaseConfig,
}

impl GitHubReleaseManager {
    /// Create new GitHub release manager with an authenticated HTTP client
    pub fn new(config: GitHubReleaseConfig) -> std::result::Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers(&config.credentials)?)
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self { http, config })
    }

    /// Create a GitHub release. Never retried.
    pub async fn create_release(
        &self,
        repo: &RepositoryRef,
        draft: &ReleaseDraft,
    ) -> Result<CreatedRelease> {
        let endpoint = join_endpoint(
            &self.config.api_base_url,
            "api_base_url",
            &format!("repos/{}/{}/releases", repo.owner, repo.name),
        )?;

        log::info!("Creating release '{}' at {}", draft.tag_name, endpoint);

        let response = self
            .http
            .post(endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|source| ReleaseCreationError::Request {
                owner: repo.owner.clone(),
                repo: repo.name.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReleaseCreationError::Rejected {
                tag: draft.tag_name.clone(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let release: CreatedRelease = response
            .json()
            .await
            .map_err(|source| ReleaseCreationError::InvalidResponse { source })?;

        log::debug!("Created release {} ({})", release.id, release.html_url);
        Ok(release)
    }

    /// Uploader bound to `release`
    pub fn asset_uploader(
        &self,
        repo: &RepositoryRef,
        release: &CreatedRelease,
    ) -> Result<GitHubAssetUploader> {
        let endpoint = match &self.config.upload_base_url {
            Some(base) => join_endpoint(
                base,
                "upload_base_url",
                &format!(
                    "repos/{}/{}/releases/{}/assets",
                    repo.owner, repo.name, release.id
                ),
            )?,
            None => upload_url_from_template(&release.upload_url)?,
        };

        Ok(GitHubAssetUploader {
            http: self.http.clone(),
            endpoint,
        })
    }
}

impl ReleaseApi for GitHubReleaseManager {
    type Uploader = GitHubAssetUploader;

    async fn create_release(
        &self,
        repo: &RepositoryRef,
        draft: &ReleaseDraft,
    ) -> Result<CreatedRelease> {
        GitHubReleaseManager::create_release(self, repo, draft).await
    }

    fn asset_uploader(
        &self,
        repo: &RepositoryRef,
        release: &CreatedRelease,
    ) -> Result<GitHubAssetUploader> {
        GitHubReleaseManager::asset_uploader(self, repo, release)
    }
}

/// Uploads assets to one release
#[derive(Debug, Clone)]
pub struct GitHubAssetUploader {
    http: reqwest::Client,
    endpoint: Url,
}

impl AssetUploader for GitHubAssetUploader {
    async fn upload(
        &self,
        asset: &ReleaseAsset,
        content: Bytes,
    ) -> std::result::Result<UploadedAsset, UploadError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("name", &asset.display_name);

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, detect_asset_content_type(&asset.source_path))
            .body(content)
            .send()
            .await
            .map_err(|source| UploadError::Request {
                name: asset.display_name.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                name: asset.display_name.clone(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse {
                name: asset.display_name.clone(),
                reason: e.to_string(),
            })
    }
}

fn join_endpoint(
    base: &Url,
    setting: &'static str,
    path: &str,
) -> std::result::Result<Url, ConfigError> {
    base.join(path)
        .map_err(|source| ConfigError::InvalidEndpoint {
            setting,
            value: base.to_string(),
            source,
        })
}

/// Strip the RFC 6570 `{?name,label}` suffix from a release's upload URL
fn upload_url_from_template(template: &str) -> std::result::Result<Url, ConfigError> {
    let raw = template
        .split_once('{')
        .map_or(template, |(url, _)| url);

    Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint {
        setting: "upload_url",
        value: template.to_string(),
        source,
    })
}

/// Detect MIME type for an asset from its file extension
pub fn detect_asset_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("deb") => "application/vnd.debian.binary-package",
        Some("rpm") => "application/x-rpm",
        Some("exe") | Some("msi") => "application/x-msdownload",
        Some("dmg") => "application/x-apple-diskimage",
        Some("apk") => "application/vnd.android.package-archive",
        Some("AppImage") => "application/x-executable",
        Some("zip") => "application/zip",
        Some("tar") => "application/x-tar",
        Some("gz") | Some("tgz") => "application/gzip",
        Some("json") => "application/json",
        Some("txt") | Some("md") => "text/plain",
        _ => "application/octet-stream",
    }
}
