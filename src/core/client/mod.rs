//! Public client surface + builder.
//! Internals are split into `auth` (login/session) and `constants` (host + UA defaults).

mod auth;
mod constants;

pub use auth::{LoginStatus, Session};

use crate::core::{
    OmnibusError, net,
    query::{ArrayFormat, QueryParams},
};
use constants::{
    API_PREFIX, DEFAULT_HOST, ENV_HOST, ENV_PASSWORD, ENV_USERNAME, USER_AGENT,
};
use reqwest::{Client, header::ACCEPT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// An authenticated handle on the Omnibus API.
///
/// A client only exists after a successful login: [`OmnibusClientBuilder::build`] performs the
/// login request and returns an error instead of a client when it fails. The session is never
/// refreshed or mutated afterwards, so clones share it and can be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct OmnibusClient {
    http: Client,
    host: Url,
    api_base: Url,
    session: Arc<Session>,
    array_format: ArrayFormat,
}

impl OmnibusClient {
    /// Create a new builder.
    pub fn builder() -> OmnibusClientBuilder {
        OmnibusClientBuilder::default()
    }

    /// Logs in against the production host with default settings.
    pub async fn login(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, OmnibusError> {
        Self::builder()
            .username(username)
            .password(password)
            .build()
            .await
    }

    /// The host this client talks to.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// The session established at construction.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether requests carry a bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.session.bearer().is_some()
    }

    pub fn array_format(&self) -> ArrayFormat {
        self.array_format
    }

    /// Builds `{host}/api/{path}` with `params` as its query string.
    ///
    /// `path` is always relative to `api/`. Each `/`-separated segment is appended as-is
    /// (percent-encoded), so `?` and `#` stay inside the path.
    ///
    /// # Errors
    ///
    /// [`OmnibusError::InvalidPath`] if `path` is an absolute URL, starts with `//`, or
    /// contains a `.` or `..` segment.
    pub fn endpoint_url(&self, path: &str, params: &QueryParams) -> Result<Url, OmnibusError> {
        let invalid = || OmnibusError::InvalidPath(path.to_string());

        if path.starts_with("//") || Url::parse(path).is_ok() {
            return Err(invalid());
        }
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(invalid());
        }

        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);
        params.apply_to(&mut url, self.array_format);
        Ok(url)
    }

    /// Performs an authenticated GET against `{host}/api/{path}` and returns the JSON body
    /// exactly as the server sent it.
    ///
    /// Every catalog method goes through here; call it directly for paths the catalog does
    /// not cover.
    ///
    /// # Errors
    ///
    /// - [`OmnibusError::Status`] for any status other than `200 OK`.
    /// - [`OmnibusError::Decode`] when the body is not JSON.
    /// - [`OmnibusError::Http`] for transport failures.
    /// - [`OmnibusError::InvalidPath`] if `path` points outside `{host}/api/`.
    pub async fn request(
        &self,
        path: &str,
        params: impl Into<QueryParams>,
    ) -> Result<Value, OmnibusError> {
        self.request_as(path, params).await
    }

    /// Like [`request`](Self::request), but deserializes the body into `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        params: impl Into<QueryParams>,
    ) -> Result<T, OmnibusError> {
        let params = params.into();
        let url = self.endpoint_url(path, &params)?;

        let mut req = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json");
        if let Some(token) = self.session.bearer() {
            req = req.bearer_auth(token);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, authenticated = self.is_authenticated(), "GET");

        let resp = req.send().await?;
        net::read_json(resp, &url).await
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and logs in an [`OmnibusClient`].
///
/// `username` and `password` are required; everything else has a default.
#[derive(Default)]
pub struct OmnibusClientBuilder {
    host: Option<String>,
    username: Option<String>,
    password: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    array_format: Option<ArrayFormat>,
    custom_client: Option<Client>,
}

impl OmnibusClientBuilder {
    /// Seeds a builder from `OMNIBUS_HOST` (optional), `OMNIBUS_USERNAME` and
    /// `OMNIBUS_PASSWORD`.
    pub fn from_env() -> Result<Self, OmnibusError> {
        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| OmnibusError::Config(format!("environment variable {name} not set")))
        };

        let mut builder = Self::default()
            .username(var(ENV_USERNAME)?)
            .password(var(ENV_PASSWORD)?);
        if let Ok(host) = std::env::var(ENV_HOST) {
            builder = builder.host(host);
        }
        Ok(builder)
    }

    /// Override the base URL. Default: `https://omnibus.phoenixportals.com`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// The login email.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Override the User-Agent. Ignored when a custom client is supplied.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    /// Ignored when a custom client is supplied.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    /// Ignored when a custom client is supplied.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Choose how list-valued parameters are written. Default: [`ArrayFormat::Indexed`].
    pub fn array_format(mut self, format: ArrayFormat) -> Self {
        self.array_format = Some(format);
        self
    }

    /// Use a pre-configured `reqwest::Client` as the transport.
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Builds the transport and logs in.
    ///
    /// # Errors
    ///
    /// - [`OmnibusError::Config`] if `username` or `password` is missing.
    /// - [`OmnibusError::Auth`] if the server rejects the credentials.
    /// - [`OmnibusError::Url`], [`OmnibusError::Http`], [`OmnibusError::Status`] or
    ///   [`OmnibusError::Decode`] if the login call itself fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn build(self) -> Result<OmnibusClient, OmnibusError> {
        let username = self
            .username
            .ok_or_else(|| OmnibusError::Config("username is required".into()))?;
        let password = self
            .password
            .ok_or_else(|| OmnibusError::Config("password is required".into()))?;

        let host = Url::parse(self.host.as_deref().unwrap_or(DEFAULT_HOST))?;
        let api_base = api_base(&host)?;

        let http = match self.custom_client {
            Some(client) => client,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        let session = auth::authenticate(&http, &api_base, &username, &password).await?;

        Ok(OmnibusClient {
            http,
            host,
            api_base,
            session: Arc::new(session),
            array_format: self.array_format.unwrap_or_default(),
        })
    }
}

/// `{host}/api/`, tolerating a host given with or without a trailing slash.
fn api_base(host: &Url) -> Result<Url, OmnibusError> {
    let mut base = host.clone();
    base.set_query(None);
    base.set_fragment(None);
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(API_PREFIX)?)
}
