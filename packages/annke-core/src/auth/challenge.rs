//! Handshake documents exchanged during session login.

use serde::{Deserialize, Serialize};

/// Challenge returned by the session login capabilities endpoint.
///
/// Parsed fresh for every connection attempt and dropped once the digest has
/// been computed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename = "SessionLoginCap")]
pub struct LoginChallenge {
    #[serde(rename = "@version", default)]
    pub version: Option<String>,
    #[serde(rename = "@xmlns", default)]
    pub xmlns: Option<String>,
    #[serde(rename = "sessionID")]
    pub session_id: String,
    pub challenge: String,
    pub iterations: u32,
    #[serde(rename = "isIrreversible")]
    pub is_irreversible: bool,
    #[serde(default)]
    pub salt: String,
    #[serde(rename = "isSessionIDValidLongTerm", default)]
    pub is_session_id_valid_long_term: LongTermFlag,
    #[serde(rename = "sessionIDVersion", default)]
    pub session_id_version: u32,
}

/// `isSessionIDValidLongTerm` element: a boolean with an `opt` descriptor attribute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LongTermFlag {
    #[serde(rename = "@opt", default)]
    pub opt: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: bool,
}

/// Body of the session login request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "SessionLogin")]
pub struct SessionLogin {
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Digest computed from the challenge, never the plain password.
    pub password: String,
    #[serde(rename = "sessionID")]
    pub session_id: String,
    #[serde(rename = "isSessionIDValidLongTerm")]
    pub is_session_id_valid_long_term: bool,
    #[serde(rename = "sessionIDVersion")]
    pub session_id_version: u32,
}

impl SessionLogin {
    /// Build the login body for `user` from a received challenge and its digest.
    pub fn from_challenge(user: &str, digest: String, challenge: &LoginChallenge) -> Self {
        Self {
            user_name: user.to_string(),
            password: digest,
            session_id: challenge.session_id.clone(),
            is_session_id_valid_long_term: challenge.is_session_id_valid_long_term.value,
            session_id_version: challenge.session_id_version,
        }
    }
}
