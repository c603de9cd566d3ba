//! Asset upload with per-file retry.
//!
//! The transport and the progress reporting are both injected: an
//! [`AssetUploader`] performs one attempt, an [`UploadObserver`] hears about
//! failed attempts and completed uploads.

mod retry;

pub use retry::{MAX_UPLOAD_ATTEMPTS, RetryPolicy, upload_with_retry};

use crate::assets::ReleaseAsset;
use crate::error::UploadError;
use bytes::Bytes;
use serde::Deserialize;
use std::future::Future;

/// Asset as reported back by the hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedAsset {
    /// Platform asset id
    pub id: u64,
    /// Published name
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Public download URL
    pub browser_download_url: String,
}

/// One upload attempt for one asset
pub trait AssetUploader {
    /// Upload `content` under the asset's display name
    fn upload(
        &self,
        asset: &ReleaseAsset,
        content: Bytes,
    ) -> impl Future<Output = Result<UploadedAsset, UploadError>> + Send;
}

/// Receives progress from [`upload_with_retry`]
pub trait UploadObserver {
    /// Attempt `attempt` (1-based) failed and another attempt will follow
    fn on_attempt_failed(&self, asset: &ReleaseAsset, attempt: u32, error: &UploadError);

    /// The asset was uploaded
    fn on_asset_uploaded(&self, asset: &ReleaseAsset, uploaded: &UploadedAsset);
}
