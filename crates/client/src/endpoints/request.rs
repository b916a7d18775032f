//! Sending requests and turning error responses into `ClientError::ApiError`.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Send a request, failing with `ApiError` on a non-2xx status.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(api_error(response).await)
    }
}

/// Build an `ApiError` from an error response, preferring Splunk's own messages.
pub async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    debug!(status, url = %url, body_len = body.len(), "Splunk returned an error response");

    let message = match SplunkMessages::parse(&body) {
        Some(messages) => messages.summary(),
        None => body,
    };

    ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    }
}
