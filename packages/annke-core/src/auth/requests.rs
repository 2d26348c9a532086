//! Construction of the two session login requests.

use crate::auth::challenge::SessionLogin;
use crate::auth::{LOGIN_PATH, RANDOM_BOUND, SESSION_PATH};
use crate::client::ConnectionConfig;
use crate::error::RequestError;
use rand::Rng;
use reqwest::{Client, Request};

/// Challenge fetch: credentials ride in the URL authority, plus `username`
/// and a throwaway `random` query value.
pub(crate) fn login_request(
    client: &Client,
    config: &ConnectionConfig,
) -> Result<Request, RequestError> {
    let mut url = config.url(LOGIN_PATH)?;
    url.set_username(&config.user)
        .map_err(|_| RequestError::Credentials)?;
    url.set_password(Some(&config.password))
        .map_err(|_| RequestError::Credentials)?;
    url.query_pairs_mut()
        .append_pair("username", &config.user)
        .append_pair("random", &random_value().to_string());

    Ok(client.get(url).build()?)
}

/// Session establishment. The device expects a GET carrying an XML body.
pub(crate) fn session_request(
    client: &Client,
    config: &ConnectionConfig,
    session: &SessionLogin,
) -> Result<Request, RequestError> {
    let body = quick_xml::se::to_string(session)?;

    let mut url = config.url(SESSION_PATH)?;
    url.query_pairs_mut()
        .append_pair("timeStamp", &chrono::Utc::now().timestamp().to_string());

    Ok(client.get(url).body(body).build()?)
}

fn random_value() -> u32 {
    rand::thread_rng().gen_range(0..RANDOM_BOUND)
}
