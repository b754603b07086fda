//! Core components of the `omnibus-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`OmnibusClient`] and its builder.
//! - The primary [`OmnibusError`] type.
//! - [`QueryParams`] and the query-string encoding of multi-value filters.
//! - Internal login and response handling.

/// The main client (`OmnibusClient`), builder, and session.
pub mod client;
/// The primary error type (`OmnibusError`) for the crate.
pub mod error;
/// Query parameters and their wire encoding.
pub mod query;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::OmnibusClient`
pub use client::{LoginStatus, OmnibusClient, OmnibusClientBuilder, Session};
pub use error::OmnibusError;
pub use query::{ArrayFormat, ParamValue, QueryParams};
