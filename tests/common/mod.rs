//! Test doubles shared by the integration tests

#![allow(dead_code)] // Not every test binary uses every helper

use bytes::Bytes;
use kodegen_release_publisher::{
    AssetUploader, CreatedRelease, ReleaseApi, ReleaseAsset, ReleaseCreationError, ReleaseDraft,
    RepositoryRef, Result, RetryPolicy, UploadError, UploadObserver, UploadedAsset,
};
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Retry policy that never sleeps
pub fn no_wait(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::ZERO)
}

/// Write `names` into `dir` and return them as assets, in order
pub fn write_assets(dir: &Path, names: &[&str]) -> Vec<ReleaseAsset> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            std::fs::write(&path, format!("contents of {name}")).unwrap();
            ReleaseAsset::new(path, *name)
        })
        .collect()
}

/// Uploader whose outcome per attempt is scripted up front
#[derive(Clone, Default)]
pub struct ScriptedUploader {
    transient_failures: u32,
    permanent_failures: Vec<String>,
    attempts: Arc<AtomicU32>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedUploader {
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// First `count` attempts fail, across all assets
    pub fn failing_first(count: u32) -> Self {
        Self {
            transient_failures: count,
            ..Self::default()
        }
    }

    pub fn always_failing() -> Self {
        Self::failing_first(u32::MAX)
    }

    /// Every attempt for the asset named `display_name` fails
    pub fn failing_for(display_name: &str) -> Self {
        Self {
            permanent_failures: vec![display_name.to_string()],
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Display names in the order attempts were made
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AssetUploader for ScriptedUploader {
    async fn upload(
        &self,
        asset: &ReleaseAsset,
        content: Bytes,
    ) -> std::result::Result<UploadedAsset, UploadError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(asset.display_name.clone());

        if attempt < self.transient_failures
            || self.permanent_failures.contains(&asset.display_name)
        {
            return Err(UploadError::Rejected {
                name: asset.display_name.clone(),
                status: 502,
                body: "Could not connect".to_string(),
            });
        }

        Ok(UploadedAsset {
            id: u64::from(attempt) + 1,
            name: asset.display_name.clone(),
            size: content.len() as u64,
            browser_download_url: format!("https://example.com/download/{}", asset.display_name),
        })
    }
}

/// Observer that records every callback
#[derive(Default)]
pub struct RecordingObserver {
    failed: Mutex<Vec<(String, u32, String)>>,
    uploaded: Mutex<Vec<String>>,
}

impl RecordingObserver {
    /// `(display name, attempt, error message)` per warning
    pub fn warnings(&self) -> Vec<(String, u32, String)> {
        self.failed.lock().unwrap().clone()
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

impl UploadObserver for RecordingObserver {
    fn on_attempt_failed(&self, asset: &ReleaseAsset, attempt: u32, error: &UploadError) {
        self.failed.lock().unwrap().push((
            asset.display_name.clone(),
            attempt,
            error.to_string(),
        ));
    }

    fn on_asset_uploaded(&self, asset: &ReleaseAsset, _uploaded: &UploadedAsset) {
        self.uploaded
            .lock()
            .unwrap()
            .push(asset.display_name.clone());
    }
}

/// Release API double handing out a [`ScriptedUploader`]
pub struct FakeReleaseApi {
    pub uploader: ScriptedUploader,
    pub reject_creation: bool,
    created: AtomicU32,
    drafts: Mutex<Vec<ReleaseDraft>>,
}

impl FakeReleaseApi {
    pub fn new(uploader: ScriptedUploader) -> Self {
        Self {
            uploader,
            reject_creation: false,
            created: AtomicU32::new(0),
            drafts: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(uploader: ScriptedUploader) -> Self {
        Self {
            reject_creation: true,
            ..Self::new(uploader)
        }
    }

    pub fn creations(&self) -> u32 {
        self.created.load(Ordering::SeqCst)
    }

    pub fn drafts(&self) -> Vec<ReleaseDraft> {
        self.drafts.lock().unwrap().clone()
    }
}

impl ReleaseApi for FakeReleaseApi {
    type Uploader = ScriptedUploader;

    async fn create_release(
        &self,
        repo: &RepositoryRef,
        draft: &ReleaseDraft,
    ) -> Result<CreatedRelease> {
        self.created.fetch_add(1, Ordering::SeqCst);
        self.drafts.lock().unwrap().push(draft.clone());

        if self.reject_creation {
            return Err(ReleaseCreationError::Rejected {
                tag: draft.tag_name.clone(),
                status: 422,
                body: "Validation Failed".to_string(),
            }
            .into());
        }

        Ok(CreatedRelease {
            id: 42,
            html_url: format!(
                "https://{}/{}/{}/releases/tag/{}",
                repo.host, repo.owner, repo.name, draft.tag_name
            ),
            upload_url: String::new(),
            draft: draft.draft,
            prerelease: draft.prerelease,
        })
    }

    fn asset_uploader(
        &self,
        _repo: &RepositoryRef,
        _release: &CreatedRelease,
    ) -> Result<ScriptedUploader> {
        Ok(self.uploader.clone())
    }
}

pub fn widgets_repo() -> RepositoryRef {
    RepositoryRef::parse("git@github.com:acme/widgets.git").unwrap()
}

pub fn draft(tag: &str) -> ReleaseDraft {
    ReleaseDraft {
        tag_name: tag.to_string(),
        target_commitish: "main".to_string(),
        name: format!("Widgets {tag}"),
        body: Some("Changes".to_string()),
        draft: false,
        prerelease: false,
        generate_release_notes: false,
    }
}
