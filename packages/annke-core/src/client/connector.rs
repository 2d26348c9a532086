//! Connector: session login and authenticated XML transport.
//!
//! A `Connector` only exists once the device has accepted a session login.
//! Its HTTP client owns the cookie store holding the session cookie, so every
//! later request is authenticated without further handshakes.

use crate::auth::{self, LOGIN_PATH, LoginChallenge, SESSION_PATH, SessionLogin};
use crate::client::config::{ConnectionConfig, REQUEST_TIMEOUT};
use crate::error::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Content type the device expects on resource updates. The body is XML regardless.
pub const UPDATE_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[derive(Debug, Clone)]
pub struct Connector {
    config: ConnectionConfig,
    client: Client,
}

impl Connector {
    /// Connect and log in using individual parameters.
    ///
    /// Equivalent to [`Connector::connect`] with a [`ConnectionConfig`].
    pub async fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        secure: bool,
    ) -> Result<Self> {
        Self::connect(ConnectionConfig::new(host, user, password, secure)).await
    }

    /// Validate `config`, fetch a login challenge and establish a session.
    ///
    /// Fails without touching the network if host or user is empty. Any
    /// failure in the handshake is returned as-is; nothing is retried.
    pub async fn connect(config: ConnectionConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::prepare("login", e))?;

        let challenge = fetch_challenge(&client, &config).await?;
        establish_session(&client, &config, &challenge).await?;

        tracing::info!(
            "Session established with {} as '{}'",
            config.host,
            config.user
        );

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// GET `path` and decode the XML response into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path).map_err(|e| Error::prepare(path, e))?;
        let request = self
            .client
            .get(url)
            .build()
            .map_err(|e| Error::prepare(path, e))?;

        let body = send(&self.client, request, path, path).await?;

        quick_xml::de::from_str(&body).map_err(|e| Error::decode(path, e))
    }

    /// PUT `payload` as XML to `path`.
    pub async fn update<T: Serialize>(&self, path: &str, payload: &T) -> Result<()> {
        let body = quick_xml::se::to_string(payload).map_err(|e| Error::prepare(path, e))?;
        let url = self.config.url(path).map_err(|e| Error::prepare(path, e))?;
        let request = self
            .client
            .put(url)
            .header(CONTENT_TYPE, UPDATE_CONTENT_TYPE)
            .body(body)
            .build()
            .map_err(|e| Error::prepare(path, e))?;

        send(&self.client, request, path, path).await?;
        Ok(())
    }
}

async fn fetch_challenge(client: &Client, config: &ConnectionConfig) -> Result<LoginChallenge> {
    let request =
        auth::requests::login_request(client, config).map_err(|e| Error::prepare("login", e))?;

    let body = send(client, request, "login", LOGIN_PATH).await?;

    let challenge: LoginChallenge =
        quick_xml::de::from_str(&body).map_err(|e| Error::decode("login", e))?;

    tracing::debug!(
        "Received login challenge (iterations: {}, irreversible: {})",
        challenge.iterations,
        challenge.is_irreversible
    );
    Ok(challenge)
}

async fn establish_session(
    client: &Client,
    config: &ConnectionConfig,
    challenge: &LoginChallenge,
) -> Result<()> {
    let digest = auth::compute_digest(&config.user, &config.password, challenge);
    let session = SessionLogin::from_challenge(&config.user, digest, challenge);

    let request = auth::requests::session_request(client, config, &session)
        .map_err(|e| Error::prepare("session", e))?;

    send(client, request, "session", SESSION_PATH).await?;
    Ok(())
}

/// Execute `request` and return the body of a 200 response.
async fn send(client: &Client, request: Request, operation: &str, path: &str) -> Result<String> {
    tracing::debug!("{} {}", request.method(), path);

    let response = client
        .execute(request)
        .await
        .map_err(|e| Error::execute(operation, e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::decode(operation, e))?;

    if status != StatusCode::OK {
        tracing::warn!("Device returned {} for {}", status, path);
        return Err(Error::Remote {
            status: status.as_u16(),
            body,
            path: path.to_string(),
        });
    }

    Ok(body)
}
