//! Request wrapper behavior over the wire: header handling, 204 responses,
//! and error normalization.

use homebox_client::config::ClientOptions;
use homebox_client::error::Error;
use homebox_client::Homebox;
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn homebox_for(server: &MockServer) -> Homebox {
    Homebox::new_with_options(ClientOptions::default().with_base_url(&server.uri()))
}

#[tokio::test]
async fn bearer_prefix_is_never_duplicated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/labels"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let homebox = homebox_for(&mock_server);

    // raw token and pre-prefixed token must produce the same header
    homebox.client().set_token("abc123");
    homebox.labels().list().await.unwrap();

    homebox.client().set_token("Bearer abc123");
    homebox.labels().list().await.unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn requests_without_token_carry_no_auth_header() {
    let mock_server = MockServer::start().await;

    // matched first; must never fire for an unauthenticated client
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"health": true})))
        .mount(&mock_server)
        .await;

    let homebox = homebox_for(&mock_server);
    let status = homebox.stats().status().await.unwrap();
    assert!(status.health);

    mock_server.verify().await;
}

#[tokio::test]
async fn delete_accepts_204_without_parsing_a_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/items/i1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let homebox = homebox_for(&mock_server);
    homebox.client().set_token("tok");

    homebox.items().delete("i1").await.unwrap();
}

#[tokio::test]
async fn error_message_extracted_from_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "item not found"})),
        )
        .mount(&mock_server)
        .await;

    let homebox = homebox_for(&mock_server);
    let err = homebox.items().get("missing").await.unwrap_err();

    match err {
        Error::Api {
            status,
            message,
            payload,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "item not found");
            assert_eq!(payload, Some(json!({"error": "item not found"})));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/labels"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let homebox = homebox_for(&mock_server);
    let err = homebox.labels().list().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "API error (503): Service Unavailable");
}

#[tokio::test]
async fn transport_failure_is_not_an_api_error() {
    // nothing is listening on this port
    let homebox = Homebox::new_with_options(
        ClientOptions::default().with_base_url("http://127.0.0.1:1/api/v1"),
    );

    let err = homebox.labels().list().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn independent_clients_hold_independent_sessions() {
    let mock_server = MockServer::start().await;

    let first = homebox_for(&mock_server);
    let second = homebox_for(&mock_server);

    first.client().set_token("tok-a");

    assert_eq!(first.client().token(), Some("tok-a".to_string()));
    assert!(!second.client().has_token());
}
