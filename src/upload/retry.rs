//! Fixed-interval retry for asset uploads.

use super::{AssetUploader, UploadObserver, UploadedAsset};
use crate::assets::ReleaseAsset;
use crate::error::UploadError;
use bytes::Bytes;
use std::time::Duration;

/// Largest accepted retry budget per asset
pub const MAX_UPLOAD_ATTEMPTS: u32 = 20;

/// How often and how patiently to retry one asset upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    wait_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            wait_interval: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Create a policy; `max_attempts` counts the first attempt and is clamped to
    /// `1..=MAX_UPLOAD_ATTEMPTS`
    pub fn new(max_attempts: u32, wait_interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.clamp(1, MAX_UPLOAD_ATTEMPTS),
            wait_interval,
        }
    }

    /// Total attempts allowed, including the first
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Pause between a failed attempt and the next one
    pub fn wait_interval(&self) -> Duration {
        self.wait_interval
    }
}

/// Upload one asset, retrying failed attempts at a fixed interval.
///
/// The file is read once up front; a read failure is returned as
/// [`UploadError::Unreadable`] without any attempt being made. Every failed
/// attempt except the last is reported to `observer` before waiting. When the
/// budget runs out the final failure is wrapped in
/// [`UploadError::RetriesExhausted`].
pub async fn upload_with_retry<U, O>(
    policy: &RetryPolicy,
    uploader: &U,
    observer: &O,
    asset: &ReleaseAsset,
) -> Result<UploadedAsset, UploadError>
where
    U: AssetUploader,
    O: UploadObserver,
{
    let content = tokio::fs::read(&asset.source_path)
        .await
        .map_err(|source| UploadError::Unreadable {
            path: asset.source_path.clone(),
            source,
        })?;
    let content = Bytes::from(content);

    let mut attempts = 0;

    loop {
        log::debug!(
            "Uploading {} as '{}' (attempt {}/{})",
            asset.source_path.display(),
            asset.display_name,
            attempts + 1,
            policy.max_attempts
        );

        match uploader.upload(asset, content.clone()).await {
            Ok(uploaded) => {
                observer.on_asset_uploaded(asset, &uploaded);
                return Ok(uploaded);
            }
            Err(error) => {
                attempts += 1;

                if attempts >= policy.max_attempts {
                    return Err(UploadError::RetriesExhausted {
                        path: asset.source_path.clone(),
                        attempts,
                        source: Box::new(error),
                    });
                }

                observer.on_attempt_failed(asset, attempts, &error);
                tokio::time::sleep(policy.wait_interval).await;
            }
        }
    }
}
