//! Release publishing: create the release, then upload its assets in order.
//!
//! Uploads are strictly sequential and fail-fast: the first asset whose retry
//! budget is exhausted aborts the run and later assets are never attempted.

use crate::assets::ReleaseAsset;
use crate::error::Result;
use crate::github::{CreatedRelease, ReleaseDraft};
use crate::source::RepositoryRef;
use crate::upload::{AssetUploader, RetryPolicy, UploadObserver, UploadedAsset, upload_with_retry};
use std::future::Future;

/// Release operations of the hosting platform
pub trait ReleaseApi {
    /// Transport for assets of one created release
    type Uploader: AssetUploader;

    /// Create the release record
    fn create_release(
        &self,
        repo: &RepositoryRef,
        draft: &ReleaseDraft,
    ) -> impl Future<Output = Result<CreatedRelease>> + Send;

    /// Uploader bound to a created release
    fn asset_uploader(
        &self,
        repo: &RepositoryRef,
        release: &CreatedRelease,
    ) -> Result<Self::Uploader>;
}

/// Result of a publish run
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// Created release
    pub release: CreatedRelease,
    /// Uploaded assets, in upload order
    pub assets: Vec<UploadedAsset>,
}

/// Drives release creation and asset upload
pub struct Publisher<'a, A, O> {
    api: &'a A,
    observer: &'a O,
    policy: RetryPolicy,
}

impl<'a, A, O> Publisher<'a, A, O>
where
    A: ReleaseApi,
    O: UploadObserver,
{
    /// Create a publisher
    pub fn new(api: &'a A, observer: &'a O, policy: RetryPolicy) -> Self {
        Self {
            api,
            observer,
            policy,
        }
    }

    /// Create the release and upload every asset.
    ///
    /// Release creation is attempted once. Asset uploads follow the retry
    /// policy; the first permanent failure is returned immediately.
    pub async fn publish(
        &self,
        repo: &RepositoryRef,
        draft: &ReleaseDraft,
        assets: &[ReleaseAsset],
    ) -> Result<PublishResult> {
        let release = self.api.create_release(repo, draft).await?;
        log::info!("Created release {} for {}", release.id, repo);

        if assets.is_empty() {
            return Ok(PublishResult {
                release,
                assets: Vec::new(),
            });
        }

        let uploader = self.api.asset_uploader(repo, &release)?;
        let assets = upload_assets(&self.policy, &uploader, self.observer, assets).await?;

        Ok(PublishResult { release, assets })
    }
}

/// Upload `assets` one after another, stopping at the first permanent failure
pub async fn upload_assets<U, O>(
    policy: &RetryPolicy,
    uploader: &U,
    observer: &O,
    assets: &[ReleaseAsset],
) -> Result<Vec<UploadedAsset>>
where
    U: AssetUploader,
    O: UploadObserver,
{
    let mut uploaded = Vec::with_capacity(assets.len());

    for (index, asset) in assets.iter().enumerate() {
        log::info!(
            "Uploading asset {}/{}: {}",
            index + 1,
            assets.len(),
            asset.source_path.display()
        );
        uploaded.push(upload_with_retry(policy, uploader, observer, asset).await?);
    }

    Ok(uploaded)
}
