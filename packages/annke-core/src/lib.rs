//! Annke Core Library
//!
//! Client for the ISAPI management interface of Annke (and compatible) devices:
//! - Session login (challenge fetch, iterated password digest, session cookie)
//! - Authenticated XML GET/PUT against device resources
//! - Typed access to channels, motion detection, schedules and event triggers
//!
//! # Example
//!
//! ```no_run
//! use annke_core::Connector;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), annke_core::Error> {
//!     // Log in; fails before any request if host or user is empty
//!     let connector = Connector::new("192.168.1.64", "admin", "password", false).await?;
//!
//!     let channels = connector.get_channels().await?;
//!     for channel in &channels.channels {
//!         let id: u32 = channel.id.parse().unwrap_or(1);
//!         let mut motion = connector.get_motion_detection(id).await?;
//!         motion.enabled = "true".to_string();
//!         connector.update_motion_detection(id, &motion).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod resources;

// Re-export commonly used types
pub use auth::{LoginChallenge, SessionLogin, compute_digest};
pub use client::{ConnectionConfig, Connector};
pub use error::{Error, RequestError, Result};
pub use resources::models::{EventTrigger, MotionDetection, MotionSchedule, VideoInputChannelList};
