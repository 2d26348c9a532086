//! Session login handshake.
//!
//! Provides the challenge/session documents, the password digest, and the
//! requests that carry them.

mod challenge;
mod digest;
pub(crate) mod requests;

pub use challenge::{LoginChallenge, LongTermFlag, SessionLogin};
pub use digest::compute_digest;

/// Challenge fetch endpoint
pub const LOGIN_PATH: &str = "/ISAPI/Security/sessionLogin/capabilities";
/// Session establishment endpoint
pub const SESSION_PATH: &str = "/ISAPI/Security/sessionLogin";

/// Exclusive upper bound of the `random` query value on the challenge fetch
pub(crate) const RANDOM_BOUND: u32 = 100_000_000;
