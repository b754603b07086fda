use crate::common;
use httpmock::Method::GET;
use omnibus_rs::{OmnibusError, QueryParams};
use serde_json::json;

#[tokio::test]
async fn non_200_is_a_status_error_with_decoded_body() {
    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let client = common::client(&server).await;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/iress/trades");
        then.status(500)
            .header("content-type", "application/json")
            .json_body(json!({ "message": "Server Error" }));
    });

    let err = client
        .iress_trades(QueryParams::new().from("2024-01-01"))
        .await
        .unwrap_err();
    mock.assert();

    assert_eq!(err.status(), Some(500));
    match err {
        OmnibusError::Status { status, url, body } => {
            assert_eq!(status, 500);
            assert!(url.contains("/api/iress/trades"), "url was {url}");
            assert_eq!(body, Some(json!({ "message": "Server Error" })));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_absent() {
    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let client = common::client(&server).await;

    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/devex/positions");
        then.status(404).body("Not Found");
    });

    match client.devex_positions(QueryParams::new()).await.unwrap_err() {
        OmnibusError::Status { status, body, .. } => {
            assert_eq!(status, 404);
            assert!(body.is_none());
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn other_2xx_statuses_are_errors_too() {
    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let client = common::client(&server).await;

    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/iress/netbalances");
        then.status(202).json_body(json!({ "queued": true }));
    });

    let err = client
        .iress_net_balances(QueryParams::new().date("2024-06-28"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(202));
}

#[tokio::test]
async fn unauthorized_is_reported_not_retried() {
    let server = common::setup_server();
    let login = common::mock_login(&server);
    let client = common::client(&server).await;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/user");
        then.status(401).json_body(json!({ "message": "Unauthenticated." }));
    });

    let err = client.me(QueryParams::new()).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(mock.calls(), 1);
    assert_eq!(login.calls(), 1, "no re-login after a 401");
}
