//! Username/password login and the bearer-token session it produces.

use super::constants::LOGIN_PATH;
use crate::core::error::OmnibusError;
use reqwest::{Client, header::ACCEPT};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use url::Url;

/// The `result` field of the login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginStatus {
    Success,
    Error,
    /// Anything else the server might send. Treated as "not authenticated".
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    result: Option<LoginStatus>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    errors: Option<Value>,
}

impl LoginResponse {
    /// First server-supplied message, rendered as text. A `null` entry counts as absent.
    fn first_error(&self) -> Option<String> {
        let first = self.errors.as_ref()?.as_array()?.first()?;
        match first {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// The outcome of the login performed when the client was built.
///
/// Immutable for the lifetime of the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    status: Option<LoginStatus>,
    token: Option<String>,
}

impl Session {
    /// The login `result`, if the server sent one.
    pub fn status(&self) -> Option<&LoginStatus> {
        self.status.as_ref()
    }

    /// Whether the server returned a token at all.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// The token to send, if and only if the login reported `success`.
    pub(crate) fn bearer(&self) -> Option<&str> {
        match self.status {
            Some(LoginStatus::Success) => self.token.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("status", &self.status)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Posts the credentials to `{api_base}login` and turns the response into a [`Session`].
///
/// A `result` of `"error"` is an [`OmnibusError::Auth`], whatever the HTTP status.
pub(super) async fn authenticate(
    http: &Client,
    api_base: &Url,
    username: &str,
    password: &str,
) -> Result<Session, OmnibusError> {
    let url = api_base.join(LOGIN_PATH)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %url, "POST login");

    let resp = http
        .post(url.clone())
        .header(ACCEPT, "application/json")
        .form(&[("email", username), ("password", password)])
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;

    let doc: LoginResponse = match serde_json::from_str(&text) {
        Ok(doc) => doc,
        Err(source) if status.is_success() => {
            return Err(OmnibusError::Decode {
                url: url.to_string(),
                source,
            });
        }
        Err(_) => {
            return Err(OmnibusError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body: serde_json::from_str(&text).ok(),
            });
        }
    };

    if doc.result == Some(LoginStatus::Error) {
        let message = doc.first_error().unwrap_or_else(|| "Unknown error".to_string());
        #[cfg(feature = "tracing")]
        tracing::warn!(%message, "login rejected");
        return Err(OmnibusError::Auth(message));
    }

    if !status.is_success() {
        return Err(OmnibusError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body: serde_json::from_str(&text).ok(),
        });
    }

    let session = Session {
        status: doc.result,
        token: doc.token,
    };

    #[cfg(feature = "tracing")]
    {
        if session.bearer().is_none() {
            tracing::warn!(
                status = ?session.status,
                has_token = session.has_token(),
                "login did not yield a bearer token; requests will be sent unauthenticated"
            );
        }
    }

    Ok(session)
}
