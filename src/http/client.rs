//! HTTP client for sending smoke-test cases to the gateway.

use crate::case::TestCase;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;

/// Thin wrapper over `reqwest::Client` that sends one case per call.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Build(e.to_string()))?;

        Ok(Self { client })
    }

    /// POST the case body and parse a 2xx response as JSON.
    ///
    /// Non-2xx responses become [`Error::Status`] carrying the body when it
    /// reads as UTF-8. A 2xx body must be valid UTF-8 JSON. The response is
    /// fully consumed on every path.
    pub async fn send(&self, case: &TestCase) -> Result<Value> {
        let headers = build_headers(&case.headers)?;

        tracing::debug!(url = %case.url, headers = headers.len(), "sending request");
        let response = self
            .client
            .post(&case.url)
            .headers(headers)
            .json(&case.body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "response received");

        if !status.is_success() {
            let body = response
                .bytes()
                .await
                .ok()
                .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok());
            return Err(Error::Status { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Convert case headers into a `HeaderMap`, keeping the last value for
/// repeated names.
fn build_headers(pairs: &[(String, String)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let header_name = HeaderName::try_from(name.as_str()).map_err(|e| Error::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
