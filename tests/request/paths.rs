use crate::common;
use httpmock::Method::GET;
use omnibus_rs::{OmnibusError, QueryParams};
use serde_json::json;

#[tokio::test]
async fn paths_cannot_leave_the_api_prefix() {
    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let outside = server.mock(|when, then| {
        when.method(GET).path("/secret");
        then.status(200).json_body(json!({ "leaked": true }));
    });

    let client = common::client(&server).await;
    let absolute = format!("{}/secret", server.base_url());

    for path in [
        "../secret",
        "iress/../../secret",
        "./user",
        "https://attacker.example/x",
        "//attacker.example/x",
        absolute.as_str(),
    ] {
        let err = client.endpoint_url(path, &QueryParams::new()).unwrap_err();
        assert!(
            matches!(err, OmnibusError::InvalidPath(ref p) if p == path),
            "{path}: got {err:?}"
        );

        let err = client.request(path, QueryParams::new()).await.unwrap_err();
        assert!(matches!(err, OmnibusError::InvalidPath(_)), "{path}: got {err:?}");
    }

    outside.assert_calls(0);
}

#[tokio::test]
async fn paths_are_appended_below_the_api_prefix() {
    let server = common::setup_server();
    let _login = common::mock_login(&server);
    let client = common::client(&server).await;
    let base = server.base_url();

    let url = client
        .endpoint_url("/iress//trades/", &QueryParams::new())
        .unwrap();
    assert_eq!(url.as_str(), format!("{base}/api/iress/trades"));

    let url = client
        .endpoint_url("positions?x=1#frag", &QueryParams::new().currency("USD"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        format!("{base}/api/positions%3Fx=1%23frag?currency=USD")
    );
}
