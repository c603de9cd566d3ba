//! Terminal reporting of upload progress

use super::RuntimeConfig;
use crate::assets::ReleaseAsset;
use crate::error::UploadError;
use crate::upload::{UploadObserver, UploadedAsset};

/// Prints upload progress; one warning line per failed attempt
pub struct ConsoleObserver<'a> {
    config: &'a RuntimeConfig,
}

impl<'a> ConsoleObserver<'a> {
    /// Report through `config`
    pub fn new(config: &'a RuntimeConfig) -> Self {
        Self { config }
    }
}

impl UploadObserver for ConsoleObserver<'_> {
    fn on_attempt_failed(&self, asset: &ReleaseAsset, attempt: u32, error: &UploadError) {
        self.config.warning_println(&format!(
            "{}. attempt failed for {}: {}",
            attempt,
            asset.source_path.display(),
            error
        ));
    }

    fn on_asset_uploaded(&self, asset: &ReleaseAsset, uploaded: &UploadedAsset) {
        log::debug!(
            "Uploaded {} as {} ({})",
            asset.source_path.display(),
            uploaded.name,
            uploaded.browser_download_url
        );
        self.config.indent(&format!(
            "✓ Uploaded: {} ({} bytes)",
            uploaded.name, uploaded.size
        ));
    }
}
