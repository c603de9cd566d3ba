//! Publish command: validate settings, create the release, upload assets.

use crate::cli::{Args, ConsoleObserver, RuntimeConfig};
use crate::config::PublishConfig;
use crate::error::Result;
use crate::github::GitHubReleaseManager;
use crate::publish::Publisher;

/// Execute the publish workflow
pub(super) async fn execute_publish(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let publish_config = PublishConfig::try_from(args)?;

    config.section("Configuration");
    for line in publish_config.summary() {
        config.indent(&line);
    }

    let manager = GitHubReleaseManager::new(publish_config.github.clone())?;
    let observer = ConsoleObserver::new(config);
    let publisher = Publisher::new(&manager, &observer, publish_config.retry);

    config.section("Release");
    config.info_println(&format!(
        "Creating release '{}' in {}/{}",
        publish_config.release.tag_name,
        publish_config.repository.owner,
        publish_config.repository.name
    ));

    let result = publisher
        .publish(
            &publish_config.repository,
            &publish_config.release,
            &publish_config.assets,
        )
        .await?;

    if !result.assets.is_empty() {
        config.success_println(&format!("Uploaded {} asset(s)", result.assets.len()));
    }

    config.success_println("Release created:");
    config.result_println(&result.release.html_url);

    Ok(0)
}
