//! Authenticated device client.
//!
//! Provides the connector that performs session login and the generic XML
//! GET/PUT transport built on its session.

mod config;
mod connector;

pub use config::{ConnectionConfig, REQUEST_TIMEOUT};
pub use connector::{Connector, UPDATE_CONTENT_TYPE};
