//! # Release Publisher
//!
//! Pipeline step that publishes a GitHub (or GitHub Enterprise) release.
//!
//! It parses the repository URL, creates the release record through the REST
//! API and uploads local files as release assets, retrying each failed upload
//! at a fixed interval.
//!
//! ## Features
//!
//! - **Repository URLs**: `https://`, `git@host:` and `ssh://git@host:port/` notations
//! - **Asset lists**: newline-delimited `path` or `path|display name` entries
//! - **Retrying uploads**: fixed-interval retry with a per-asset attempt budget
//! - **Fail-fast**: the first permanently failed asset stops the run
//!
//! ## Usage
//!
//! ```bash
//! repository_url=git@github.com:acme/widgets.git tag=1.2.0 commit=main \
//!   name="Widgets 1.2.0" api_token=... files_to_upload="dist/widgets.zip" \
//!   kodegen_release_publisher
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod publish;
pub mod source;
pub mod upload;

// Re-export main types for public API
pub use assets::{ReleaseAsset, resolve_assets};
pub use cli::Args;
pub use config::PublishConfig;
pub use error::{
    AssetSpecError, ConfigError, ReleaseCreationError, ReleaseError, Result, UploadError,
};
pub use github::{CreatedRelease, Credentials, GitHubReleaseManager, ReleaseDraft};
pub use publish::{PublishResult, Publisher, ReleaseApi, upload_assets};
pub use source::RepositoryRef;
pub use upload::{AssetUploader, RetryPolicy, UploadObserver, UploadedAsset, upload_with_retry};
