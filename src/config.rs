//! Validated publishing configuration.
//!
//! [`Args`] holds raw strings as they arrive from flags or the environment;
//! [`PublishConfig`] is what the publisher runs on. All validation, including
//! repository URL parsing and asset list resolution, happens here, before any
//! network traffic.

use crate::assets::{ReleaseAsset, resolve_assets};
use crate::cli::Args;
use crate::error::{ConfigError, ReleaseError};
use crate::github::{Credentials, DEFAULT_API_BASE_URL, GitHubReleaseConfig, ReleaseDraft};
use crate::source::RepositoryRef;
use crate::upload::{MAX_UPLOAD_ATTEMPTS, RetryPolicy};
use std::time::Duration;
use url::Url;

/// Everything needed for one publish run
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Repository the release is created in
    pub repository: RepositoryRef,
    /// Release payload
    pub release: ReleaseDraft,
    /// Assets in upload order
    pub assets: Vec<ReleaseAsset>,
    /// API endpoints and credentials
    pub github: GitHubReleaseConfig,
    /// Retry policy applied to each asset
    pub retry: RetryPolicy,
}

impl TryFrom<&Args> for PublishConfig {
    type Error = ReleaseError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let token = required("api_token", &args.api_token)?;
        let repository_url = required("repository_url", &args.repository_url)?;
        let repository = RepositoryRef::parse(repository_url.trim())?;

        let release = ReleaseDraft {
            tag_name: required("tag", &args.tag)?,
            target_commitish: required("commit", &args.commit)?,
            name: required("name", &args.name)?,
            body: optional(&args.body),
            draft: parse_flag("draft", &args.draft)?,
            prerelease: parse_flag("pre_release", &args.pre_release)?,
            generate_release_notes: parse_flag(
                "generate_release_notes",
                &args.generate_release_notes,
            )?,
        };

        let assets = resolve_assets(args.files_to_upload.as_deref().unwrap_or_default())?;

        let api_base_url = match optional(&args.api_base_url) {
            Some(value) => parse_base_url("api_base_url", &value)?,
            None => parse_base_url("api_base_url", DEFAULT_API_BASE_URL)?,
        };
        let upload_base_url = optional(&args.upload_base_url)
            .map(|value| parse_base_url("upload_base_url", &value))
            .transpose()?;

        let retry = retry_policy(args.upload_attempts, args.upload_retry_wait)?;

        Ok(Self {
            repository,
            release,
            assets,
            github: GitHubReleaseConfig {
                credentials: Credentials::new(optional(&args.username), token),
                api_base_url,
                upload_base_url,
            },
            retry,
        })
    }
}

impl PublishConfig {
    /// Effective settings with secrets masked, one `key: value` per line
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("repository: {}", self.repository),
            format!("auth: {} (token: ***)", self.github.credentials.scheme()),
            format!("tag: {}", self.release.tag_name),
            format!("commit: {}", self.release.target_commitish),
            format!("name: {}", self.release.name),
            format!("draft: {}", yes_no(self.release.draft)),
            format!("pre_release: {}", yes_no(self.release.prerelease)),
            format!(
                "generate_release_notes: {}",
                yes_no(self.release.generate_release_notes)
            ),
            format!("api_base_url: {}", self.github.api_base_url),
        ];

        if let Some(upload_base_url) = &self.github.upload_base_url {
            lines.push(format!("upload_base_url: {}", upload_base_url));
        }

        lines.push(format!(
            "upload retries: {} attempt(s), {}s apart",
            self.retry.max_attempts(),
            self.retry.wait_interval().as_secs()
        ));
        lines.push(format!("files_to_upload: {}", self.assets.len()));
        lines.extend(self.assets.iter().map(|asset| {
            format!(
                "  - {} -> {}",
                asset.source_path.display(),
                asset.display_name
            )
        }));

        lines
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required(setting: &'static str, value: &Option<String>) -> Result<String, ConfigError> {
    optional(value).ok_or(ConfigError::Missing { setting })
}

/// `yes`/`no` flag; unset means `no`
fn parse_flag(setting: &'static str, value: &Option<String>) -> Result<bool, ConfigError> {
    match optional(value).as_deref() {
        None | Some("no") => Ok(false),
        Some("yes") => Ok(true),
        Some(other) => Err(ConfigError::InvalidFlag {
            setting,
            value: other.to_string(),
        }),
    }
}

/// Absolute URL, normalised to end in `/` so relative joins keep its path
fn parse_base_url(setting: &'static str, value: &str) -> Result<Url, ConfigError> {
    let normalised = if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{value}/")
    };

    Url::parse(&normalised).map_err(|source| ConfigError::InvalidEndpoint {
        setting,
        value: value.to_string(),
        source,
    })
}

fn retry_policy(attempts: Option<u32>, wait_secs: Option<u64>) -> Result<RetryPolicy, ConfigError> {
    let defaults = RetryPolicy::default();
    let attempts = attempts.unwrap_or(defaults.max_attempts());

    if attempts == 0 || attempts > MAX_UPLOAD_ATTEMPTS {
        return Err(ConfigError::InvalidRetryBudget {
            value: attempts,
            max: MAX_UPLOAD_ATTEMPTS,
        });
    }

    let wait = wait_secs
        .map(Duration::from_secs)
        .unwrap_or(defaults.wait_interval());

    Ok(RetryPolicy::new(attempts, wait))
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
