use crate::common::{self, PASSWORD, USERNAME};
use httpmock::Method::{GET, POST};
use omnibus_rs::{LoginStatus, OmnibusClient, OmnibusError};
use serde_json::json;

async fn build(server: &httpmock::MockServer) -> Result<OmnibusClient, OmnibusError> {
    OmnibusClient::builder()
        .host(server.base_url())
        .username(USERNAME)
        .password(PASSWORD)
        .build()
        .await
}

#[tokio::test]
async fn valid_credentials_yield_an_authenticated_client() {
    let server = common::setup_server();
    let login = common::mock_login(&server);

    let client = build(&server).await.unwrap();

    login.assert();
    assert!(client.is_authenticated());
    assert_eq!(client.session().status(), Some(&LoginStatus::Success));
    assert!(client.session().has_token());
    assert_eq!(client.host().as_str(), format!("{}/", server.base_url()));
}

#[tokio::test]
async fn error_result_reports_first_server_message() {
    let server = common::setup_server();
    let login = common::mock_login_body(
        &server,
        json!({
            "result": "error",
            "errors": ["These credentials do not match our records.", "second"]
        }),
    );
    let api = server.mock(|when, then| {
        when.method(GET).path("/api/user");
        then.status(200).json_body(json!({}));
    });

    let err = build(&server).await.unwrap_err();
    login.assert();

    match err {
        OmnibusError::Auth(msg) => {
            assert_eq!(msg, "These credentials do not match our records.")
        }
        other => panic!("expected Auth error, got {other:?}"),
    }
    assert_eq!(api.calls(), 0, "no API call should follow a failed login");
}

#[tokio::test]
async fn error_result_without_messages_is_unknown_error() {
    for body in [
        json!({ "result": "error" }),
        json!({ "result": "error", "errors": [] }),
        json!({ "result": "error", "errors": null }),
        json!({ "result": "error", "errors": [null] }),
    ] {
        let server = common::setup_server();
        let _login = common::mock_login_body(&server, body.clone());

        match build(&server).await.unwrap_err() {
            OmnibusError::Auth(msg) => assert_eq!(msg, "Unknown error", "body {body}"),
            other => panic!("expected Auth error for {body}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn error_result_wins_over_http_status() {
    let server = common::setup_server();
    let _login = server.mock(|when, then| {
        when.method(POST).path("/api/login");
        then.status(422)
            .header("content-type", "application/json")
            .json_body(json!({ "result": "error", "errors": ["The email field is required."] }));
    });

    match build(&server).await.unwrap_err() {
        OmnibusError::Auth(msg) => assert_eq!(msg, "The email field is required."),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_on_login_is_a_status_error() {
    let server = common::setup_server();
    let _login = server.mock(|when, then| {
        when.method(POST).path("/api/login");
        then.status(503).body("maintenance");
    });

    match build(&server).await.unwrap_err() {
        OmnibusError::Status { status, url, body } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/api/login"), "url was {url}");
            assert!(body.is_none());
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_login_body_is_a_decode_error() {
    let server = common::setup_server();
    let _login = server.mock(|when, then| {
        when.method(POST).path("/api/login");
        then.status(200).body("<html>login</html>");
    });

    let err = build(&server).await.unwrap_err();
    assert!(
        matches!(err, OmnibusError::Decode { ref url, .. } if url.ends_with("/api/login")),
        "got {err:?}"
    );
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Port 9 (discard) on loopback is not served by the mock server.
    let err = OmnibusClient::builder()
        .host("http://127.0.0.1:9")
        .username(USERNAME)
        .password(PASSWORD)
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, OmnibusError::Http(_)), "got {err:?}");
}
