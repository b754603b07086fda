//! # omnibus-rs
//!
//! An async client for the Omnibus financial-data API: Iress and Devex commissions,
//! financing, taxes, money flow, balances, positions and trades.
//!
//! Building a client logs in with a username and password. Every later call sends the
//! bearer token from that login and returns the JSON body exactly as the server sent it.
//!
//! ## Quick start
//!
//! ```no_run
//! use omnibus_rs::{OmnibusClient, QueryParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OmnibusClient::builder()
//!         .username("ops@example.com")
//!         .password("hunter2")
//!         .build()
//!         .await?;
//!
//!     let me = client.me(QueryParams::new()).await?;
//!     println!("logged in as {}", me["name"]);
//!
//!     let trades = client
//!         .iress_trades(
//!             QueryParams::new()
//!                 .from("2024-01-01")
//!                 .to("2024-01-31")
//!                 .accounts(["A1", "A2"]),
//!         )
//!         .await?;
//!     println!("{trades:#}");
//!     Ok(())
//! }
//! ```
//!
//! ## Multi-value filters
//!
//! List values such as `accounts` are written as `accounts[0]=A1&accounts[1]=A2` by
//! default, which is how the server's form parser reads arrays. Other spellings are
//! available through [`ArrayFormat`] on the builder. A comma-separated string is sent
//! as a single value.
//!
//! ## Logging
//!
//! Enable the `tracing` feature to get spans around each call and events for failed
//! requests and missing required filters.

pub mod catalog;
pub mod core;

pub use crate::catalog::{Endpoint, ParamSpec};
pub use crate::core::{
    ArrayFormat, LoginStatus, OmnibusClient, OmnibusClientBuilder, OmnibusError, ParamValue,
    QueryParams, Session,
};
