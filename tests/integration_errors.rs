mod common;

use common::{client_for, spawn_backend};
use rollbook_core::errors::{ErrorKind, GENERIC_ERROR_MESSAGE};

#[tokio::test]
async fn test_unparseable_failure_body_falls_back_to_generic_message() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let err = api.get::<serde_json::Value>("/boom").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Backend { status: 500 });
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_unknown_route_is_a_backend_error_without_message() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let err = api.get::<serde_json::Value>("/nope").await.unwrap_err();
    // axum's bare 404 carries no JSON body to extract a message from.
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    // Nothing listens here; the connect itself fails.
    let api = client_for("http://127.0.0.1:1");

    let err = api.get::<serde_json::Value>("/students").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_shape_mismatch_is_a_decode_error() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    // The students listing is an envelope, not a bare array.
    let err = api
        .get::<Vec<serde_json::Value>>("/students")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Decode);
}
