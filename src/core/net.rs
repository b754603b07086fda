use crate::core::OmnibusError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Read an API response and decode its JSON body.
///
/// Anything but `200 OK` becomes [`OmnibusError::Status`], carrying the body when it is JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    url: &Url,
) -> Result<T, OmnibusError> {
    let status = resp.status();
    let text = resp.text().await?;

    if status != StatusCode::OK {
        let body = serde_json::from_str::<Value>(&text).ok();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = status.as_u16(),
            url = %url,
            body = %body.as_ref().map_or_else(|| text.clone(), serde_json::Value::to_string),
            "API request failed"
        );

        return Err(OmnibusError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        });
    }

    serde_json::from_str(&text).map_err(|source| OmnibusError::Decode {
        url: url.to_string(),
        source,
    })
}
