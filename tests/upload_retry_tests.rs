mod common;

use common::{RecordingObserver, ScriptedUploader, no_wait, write_assets};
use kodegen_release_publisher::{ReleaseAsset, RetryPolicy, UploadError, upload_with_retry};
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_succeeds_first_time_without_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_assets(dir.path(), &["app.zip"]).remove(0);
    let uploader = ScriptedUploader::succeeding();
    let observer = RecordingObserver::default();

    let uploaded = upload_with_retry(&no_wait(3), &uploader, &observer, &asset)
        .await
        .unwrap();

    assert_eq!(uploaded.name, "app.zip");
    assert_eq!(uploaded.size, "contents of app.zip".len() as u64);
    assert_eq!(uploader.attempts(), 1);
    assert!(observer.warnings().is_empty());
    assert_eq!(observer.uploaded(), ["app.zip"]);
}

#[tokio::test]
async fn test_always_failing_exhausts_budget() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_assets(dir.path(), &["app.zip"]).remove(0);
    let uploader = ScriptedUploader::always_failing();
    let observer = RecordingObserver::default();

    let err = upload_with_retry(&no_wait(3), &uploader, &observer, &asset)
        .await
        .unwrap_err();

    assert_eq!(uploader.attempts(), 3);

    let attempts: Vec<u32> = observer
        .warnings()
        .into_iter()
        .map(|(_, attempt, _)| attempt)
        .collect();
    assert_eq!(attempts, [1, 2]);
    assert!(observer.uploaded().is_empty());

    match &err {
        UploadError::RetriesExhausted {
            path,
            attempts,
            source,
        } => {
            assert_eq!(path, &asset.source_path);
            assert_eq!(*attempts, 3);
            assert!(matches!(**source, UploadError::Rejected { status: 502, .. }));
        }
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains(&asset.source_path.display().to_string()));
    assert!(message.contains("Could not connect"));
}

#[tokio::test]
async fn test_recovers_after_transient_failures() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_assets(dir.path(), &["app.zip"]).remove(0);
    let uploader = ScriptedUploader::failing_first(2);
    let observer = RecordingObserver::default();

    let uploaded = upload_with_retry(&no_wait(3), &uploader, &observer, &asset)
        .await
        .unwrap();

    assert_eq!(uploaded.name, "app.zip");
    assert_eq!(uploader.attempts(), 3);

    let warnings = observer.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].1, 1);
    assert_eq!(warnings[1].1, 2);
    assert!(warnings[0].2.contains("Could not connect"));
    assert_eq!(observer.uploaded(), ["app.zip"]);
}

#[tokio::test]
async fn test_single_attempt_budget_never_warns() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_assets(dir.path(), &["app.zip"]).remove(0);
    let uploader = ScriptedUploader::always_failing();
    let observer = RecordingObserver::default();

    let err = upload_with_retry(&no_wait(1), &uploader, &observer, &asset)
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::RetriesExhausted { attempts: 1, .. }));
    assert_eq!(uploader.attempts(), 1);
    assert!(observer.warnings().is_empty());
}

#[tokio::test]
async fn test_unreadable_file_is_not_retried() {
    let dir = tempfile::tempdir().unwrap();
    let asset = ReleaseAsset::new(dir.path().join("missing.zip"), "missing.zip");
    let uploader = ScriptedUploader::succeeding();
    let observer = RecordingObserver::default();

    let err = upload_with_retry(&no_wait(3), &uploader, &observer, &asset)
        .await
        .unwrap_err();

    match err {
        UploadError::Unreadable { path, .. } => assert_eq!(path, asset.source_path),
        other => panic!("expected Unreadable, got {other:?}"),
    }
    assert_eq!(uploader.attempts(), 0);
    assert!(observer.warnings().is_empty());
}

#[tokio::test]
async fn test_waits_fixed_interval_between_attempts() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_assets(dir.path(), &["app.zip"]).remove(0);
    let uploader = ScriptedUploader::failing_first(2);
    let observer = RecordingObserver::default();
    let policy = RetryPolicy::new(3, Duration::from_millis(20));

    let started = Instant::now();
    upload_with_retry(&policy, &uploader, &observer, &asset)
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(40));
}
