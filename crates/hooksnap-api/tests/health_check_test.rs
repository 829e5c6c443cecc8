//! Health endpoint integration tests.

mod helpers;

use helpers::{setup_test_app, TEST_TOKEN};
use hooksnap_api::constants::HEALTH_PATH;

#[tokio::test]
async fn test_health_returns_ok() {
    let app = setup_test_app(None).await;

    let response = app.client().get(HEALTH_PATH).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_health_ignores_token_and_writes_nothing() {
    let app = setup_test_app(Some(TEST_TOKEN)).await;

    let response = app.client().get(HEALTH_PATH).await;

    assert_eq!(response.status_code(), 200);
    assert!(app.stored_files().is_empty());
}
