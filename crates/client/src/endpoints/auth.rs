//! Session login endpoint.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// Exchange username and password for a session key.
///
/// Accepts the key either at the top level (`sessionKey`) or inside
/// `entry[0].content`. A response without a key fails with a
/// "No session key" message so the caller can treat it as transient.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &SecretString,
) -> Result<SecretString> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client
        .post(&url)
        .form(&[
            ("username", username),
            ("password", password.expose_secret()),
            ("output_mode", "json"),
        ]);
    let response = send_request(builder).await?;
    let body = response.text().await?;

    let key = serde_json::from_str::<Value>(&body).ok().and_then(|v| {
        v.get("sessionKey")
            .or_else(|| v.pointer("/entry/0/content/sessionKey"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    });

    match key {
        Some(key) => Ok(SecretString::new(key.into())),
        None => Err(ClientError::AuthFailed(
            "No session key available in login response".to_string(),
        )),
    }
}
