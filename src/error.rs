//! Error types for release publishing.
//!
//! Every failure is either retried within its budget (asset uploads) or
//! terminates the run with a message naming the offending setting, line or file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release publishing operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all release publishing operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Configuration errors (pre-flight)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Asset list errors (pre-flight)
    #[error("Asset list error: {0}")]
    AssetSpec(#[from] AssetSpecError),

    /// Release creation errors (never retried)
    #[error("Release creation error: {0}")]
    Creation(#[from] ReleaseCreationError),

    /// Asset upload errors
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),
}

/// Missing or invalid settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required setting not provided
    #[error("Missing required setting '{setting}'")]
    Missing {
        /// Setting name as it appears in the environment
        setting: &'static str,
    },

    /// Boolean flag with a value other than yes/no
    #[error("Invalid value '{value}' for '{setting}': expected 'yes' or 'no'")]
    InvalidFlag {
        /// Setting name
        setting: &'static str,
        /// Rejected value
        value: String,
    },

    /// Endpoint override that is not an absolute URL
    #[error("Invalid URL '{value}' for '{setting}': {source}")]
    InvalidEndpoint {
        /// Setting name
        setting: &'static str,
        /// Rejected value
        value: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// Repository URL in none of the supported notations
    #[error("Invalid repository URL '{url}': {reason}")]
    InvalidRepositoryUrl {
        /// URL as configured
        url: String,
        /// Which structural part is missing
        reason: String,
    },

    /// Retry budget outside the accepted range
    #[error("Invalid upload attempt count {value}: expected 1 to {max}")]
    InvalidRetryBudget {
        /// Rejected value
        value: u32,
        /// Largest accepted value
        max: u32,
    },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {reason}")]
    HttpClient {
        /// Reason for the error
        reason: String,
    },
}

/// Malformed entries in the asset list
#[derive(Error, Debug)]
pub enum AssetSpecError {
    /// Entry could not be turned into a path and display name
    #[error("Invalid asset entry on line {line} ('{entry}'): {reason}")]
    InvalidAssetSpec {
        /// 1-based line number within the asset list
        line: usize,
        /// Offending line as written
        entry: String,
        /// Reason for the error
        reason: String,
    },
}

/// Failures while creating the release record
#[derive(Error, Debug)]
pub enum ReleaseCreationError {
    /// Request never produced a response
    #[error("Failed to reach API for {owner}/{repo}: {source}")]
    Request {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
        /// Transport failure
        #[source]
        source: reqwest::Error,
    },

    /// API answered with a non-success status
    #[error("API rejected release '{tag}' with HTTP {status}: {body}")]
    Rejected {
        /// Tag the release was requested for
        tag: String,
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Success response that could not be decoded
    #[error("Unexpected release response: {source}")]
    InvalidResponse {
        /// Decode failure
        #[source]
        source: reqwest::Error,
    },
}

/// Failures while uploading a single asset
#[derive(Error, Debug)]
pub enum UploadError {
    /// Asset file could not be read; never retried
    #[error("Failed to read asset file {}: {source}", .path.display())]
    Unreadable {
        /// Source path of the asset
        path: PathBuf,
        /// I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Request never produced a response
    #[error("Failed to upload '{name}': {source}")]
    Request {
        /// Display name of the asset
        name: String,
        /// Transport failure
        #[source]
        source: reqwest::Error,
    },

    /// API answered with a non-success status
    #[error("API rejected asset '{name}' with HTTP {status}: {body}")]
    Rejected {
        /// Display name of the asset
        name: String,
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Success response that could not be decoded
    #[error("Unexpected upload response for '{name}': {reason}")]
    InvalidResponse {
        /// Display name of the asset
        name: String,
        /// Reason for the error
        reason: String,
    },

    /// Every attempt in the retry budget failed
    #[error("Failed to upload file ({}) after {attempts} attempt(s): {source}", .path.display())]
    RetriesExhausted {
        /// Source path of the asset
        path: PathBuf,
        /// Number of attempts made
        attempts: u32,
        /// Failure of the final attempt
        #[source]
        source: Box<UploadError>,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Config(ConfigError::Missing { setting }) => vec![
                format!("Set the '{}' environment variable", setting),
                format!("Or pass --{} on the command line", setting.replace('_', "-")),
            ],
            ReleaseError::Config(ConfigError::InvalidRepositoryUrl { .. }) => vec![
                "Use https://<host>/<owner>/<name>[.git]".to_string(),
                "Or git@<host>:<owner>/<name>[.git]".to_string(),
                "Or ssh://git@<host>:<port>/<owner>/<name>[.git]".to_string(),
            ],
            ReleaseError::AssetSpec(_) => vec![
                "Write one asset per line as 'path' or 'path|display name'".to_string(),
                "Both sides of '|' must be non-empty".to_string(),
            ],
            ReleaseError::Creation(ReleaseCreationError::Rejected { status: 401, .. })
            | ReleaseError::Creation(ReleaseCreationError::Rejected { status: 403, .. }) => vec![
                "Verify the API token is valid and has write access to the repository"
                    .to_string(),
                "Leave 'username' unset to authenticate with a bearer token".to_string(),
            ],
            ReleaseError::Creation(ReleaseCreationError::Rejected { status: 422, .. }) => vec![
                "A release for this tag may already exist".to_string(),
                "Check that the commit exists on the remote".to_string(),
            ],
            ReleaseError::Upload(UploadError::Unreadable { .. }) => vec![
                "Check that the asset path exists relative to the working directory"
                    .to_string(),
            ],
            ReleaseError::Upload(UploadError::RetriesExhausted { .. }) => vec![
                "Increase 'upload_attempts' or 'upload_retry_wait' for flaky networks"
                    .to_string(),
                "Delete the partially populated release before re-running".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
