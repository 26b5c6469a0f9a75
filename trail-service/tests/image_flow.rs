//! Image dispatcher tests: filename derivation, downloads, partial failure.

use std::sync::Arc;
use trail_service::services::providers::mock::MockImageProvider;
use trail_service::services::{ImageDispatcher, ImageStore};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROMPT: &str = "Find me a 5-mile creekside loop near a waterfall, moderate difficulty";

fn dispatcher_for(server: &MockServer, dir: &std::path::Path, files: &[&str]) -> ImageDispatcher {
    let urls = files
        .iter()
        .map(|name| format!("{}/{}", server.uri(), name))
        .collect();

    ImageDispatcher::new(
        Arc::new(MockImageProvider::new(true, urls)),
        ImageStore::new(dir),
        2,
        "1024x1024",
    )
}

async fn mount(server: &MockServer, name: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", name)))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(b"image-bytes".to_vec()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn saves_every_image_under_the_derived_name() {
    let server = MockServer::start().await;
    mount(&server, "a.png", 200).await;
    mount(&server, "b.png", 200).await;

    let dir = tempfile::tempdir().unwrap();
    let dispatcher = dispatcher_for(&server, dir.path(), &["a.png", "b.png"]);

    let images = dispatcher.generate(PROMPT).await.unwrap();

    let filenames: Vec<&str> = images.iter().map(|i| i.filename.as_str()).collect();
    assert_eq!(
        filenames,
        vec![
            "creekside_trail_environment_1.png",
            "creekside_trail_environment_2.png"
        ]
    );
    for image in &images {
        assert!(dir.path().join(&image.filename).exists());
    }
}

#[tokio::test]
async fn failed_download_is_skipped_not_fatal() {
    let server = MockServer::start().await;
    mount(&server, "ok.png", 200).await;
    mount(&server, "gone.png", 404).await;

    let dir = tempfile::tempdir().unwrap();
    let dispatcher = dispatcher_for(&server, dir.path(), &["ok.png", "gone.png"]);

    let images = dispatcher.generate(PROMPT).await.unwrap();

    // The second URL failed; the list shrinks, indexes are kept.
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].filename, "creekside_trail_environment_1.png");
    assert!(dir.path().join("creekside_trail_environment_1.png").exists());
    assert!(!dir.path().join("creekside_trail_environment_2.png").exists());
}

#[tokio::test]
async fn provider_failure_returns_no_filenames() {
    let dir = tempfile::tempdir().unwrap();
    let dispatcher = ImageDispatcher::new(
        Arc::new(MockImageProvider::new(false, Vec::new())),
        ImageStore::new(dir.path()),
        2,
        "1024x1024",
    );

    assert!(dispatcher.generate(PROMPT).await.is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn repeated_prompt_overwrites_the_earlier_files() {
    let server = MockServer::start().await;
    mount(&server, "a.png", 200).await;

    let dir = tempfile::tempdir().unwrap();
    let dispatcher = dispatcher_for(&server, dir.path(), &["a.png"]);

    dispatcher.generate(PROMPT).await.unwrap();
    let images = dispatcher.generate(PROMPT).await.unwrap();

    // Same derived name both times: one file on disk, silently replaced.
    assert_eq!(images.len(), 1);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
