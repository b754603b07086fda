use crate::common;
use httpmock::Method::GET;
use omnibus_rs::{OmnibusError, QueryParams};
use serde::Deserialize;
use serde_json::json;

#[tokio::test]
async fn json_body_is_returned_verbatim() {
    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let client = common::client(&server).await;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/iress/commissions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"a":1,"b":[2,3]}"#);
    });

    let body = client.iress_commissions(QueryParams::new()).await.unwrap();
    mock.assert();
    assert_eq!(body, json!({ "a": 1, "b": [2, 3] }));
}

#[tokio::test]
async fn top_level_arrays_and_scalars_pass_through() {
    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let client = common::client(&server).await;

    let _rows = server.mock(|when, then| {
        when.method(GET).path("/api/devex/trades");
        then.status(200).body(r#"[{"id":1},{"id":2}]"#);
    });
    let _null = server.mock(|when, then| {
        when.method(GET).path("/api/devex/interest");
        then.status(200).body("null");
    });

    let rows = client.devex_trades(QueryParams::new()).await.unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(2));

    let nothing = client.devex_interest(QueryParams::new()).await.unwrap();
    assert!(nothing.is_null());
}

#[tokio::test]
async fn request_as_decodes_into_caller_types() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: u64,
        email: String,
    }

    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let client = common::client(&server).await;

    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/user");
        then.status(200)
            .json_body(json!({ "id": 42, "email": "ops@example.com", "extra": "ignored" }));
    });

    let user: User = client.request_as("user", QueryParams::new()).await.unwrap();
    assert_eq!(
        user,
        User {
            id: 42,
            email: "ops@example.com".into()
        }
    );

    let err = client
        .request_as::<Vec<User>>("user", QueryParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, OmnibusError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() {
    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let client = common::client(&server).await;

    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/iress/trades");
        then.status(200).body("<!doctype html><p>login expired</p>");
    });

    match client.iress_trades(QueryParams::new()).await.unwrap_err() {
        OmnibusError::Decode { url, .. } => assert!(url.contains("/api/iress/trades")),
        other => panic!("expected Decode error, got {other:?}"),
    }
}
