use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Timeout applied to every request made by a connector.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Parameters needed to reach and log in to a device.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Device address, optionally with a port (e.g. `192.168.1.64` or `camera.lan:8080`)
    pub host: String,
    pub user: String,
    pub password: String,
    /// Use https instead of http
    pub secure: bool,
}

impl ConnectionConfig {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        secure: bool,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            secure,
        }
    }

    /// Check required parameters. Runs before any request is built.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::MissingParameter("host"));
        }
        if self.user.is_empty() {
            return Err(Error::MissingParameter("user"));
        }
        Ok(())
    }

    pub fn scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// Absolute URL of `path` on the device.
    pub fn url(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        Url::parse(&format!("{}://{}{}", self.scheme(), self.host, path))
    }
}

// Keep the password out of debug output.
impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("secure", &self.secure)
            .finish()
    }
}
