//! Fetching the published manifest over HTTP.

use temurin_manifest::{ManifestError, PreviousManifest};

const PUBLISHED: &str = "Tags: 21.0.5_11-jdk-noble, 21-jdk-noble, 21-noble\r\n\
GitCommit: 3333333333333333333333333333333333333333\r\n\
Directory: 21/jdk/ubuntu/noble\r\n\r\n";

#[tokio::test]
async fn test_fetch_previous_manifest() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/library/eclipse-temurin")
        .with_status(200)
        .with_body(PUBLISHED)
        .create_async()
        .await;

    let url = format!("{}/library/eclipse-temurin", server.url());
    let previous = PreviousManifest::fetch(&url).await.unwrap();
    mock.assert_async().await;

    let tags = vec!["21-jdk-noble".to_string()];
    assert!(previous.mentions_any(&tags));
    assert_eq!(
        previous.published_commit(&tags, "21/jdk/ubuntu/noble"),
        Some("3333333333333333333333333333333333333333")
    );
    assert!(!previous.text().contains('\r'));
}

#[tokio::test]
async fn test_fetch_error_status_is_fatal() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/library/eclipse-temurin")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/library/eclipse-temurin", server.url());
    let err = PreviousManifest::fetch(&url).await.unwrap_err();

    assert!(matches!(err, ManifestError::Status { status: 404, .. }));
}

#[test]
fn test_load_local_copy() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("eclipse-temurin");
    std::fs::write(&path, PUBLISHED).unwrap();

    let previous = PreviousManifest::load(&path).unwrap();
    assert!(previous.mentions_any(&["21-noble".to_string()]));

    let missing = PreviousManifest::load(&temp.path().join("missing"));
    assert!(matches!(missing, Err(ManifestError::Io(_))));
}
