//! Centralized constants for default endpoints and UA.

/// Production Omnibus host.
pub(crate) const DEFAULT_HOST: &str = "https://omnibus.phoenixportals.com";

/// Every endpoint lives under this prefix of the host.
pub(crate) const API_PREFIX: &str = "api/";

/// Login endpoint, relative to [`API_PREFIX`].
pub(crate) const LOGIN_PATH: &str = "login";

pub(crate) const USER_AGENT: &str = concat!("omnibus-rs/", env!("CARGO_PKG_VERSION"));

/// Environment variables read by `OmnibusClientBuilder::from_env`.
pub(crate) const ENV_HOST: &str = "OMNIBUS_HOST";
pub(crate) const ENV_USERNAME: &str = "OMNIBUS_USERNAME";
pub(crate) const ENV_PASSWORD: &str = "OMNIBUS_PASSWORD";
