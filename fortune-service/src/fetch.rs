//! Horoscope API client.
//!
//! One `GET` per request, bounded by a hard timeout. The response body is
//! handed back as an opaque JSON value; shaping it is the normalizer's job.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use fortune_core::{FortuneError, Result, ZodiacSign};

use crate::options::ServiceOptions;

/// Anything that can produce a raw horoscope payload for a sign.
#[async_trait]
pub trait HoroscopeSource: Send + Sync {
    async fn fetch(&self, sign: &ZodiacSign) -> Result<Value>;
}

/// Horoscope source backed by the remote HTTP API.
pub struct HttpHoroscopeSource {
    /// HTTP client for API requests
    client: Client,
    /// Base URL, without query string
    endpoint: String,
    /// Value of the `day` query parameter
    day: String,
    /// Hard deadline for the whole request, body included
    timeout: Duration,
}

impl HttpHoroscopeSource {
    pub fn new(options: &ServiceOptions) -> Self {
        Self {
            client: Client::new(),
            endpoint: options.endpoint.clone(),
            day: options.day.clone(),
            timeout: Duration::from_millis(options.timeout_ms),
        }
    }

    /// Full request URL for a sign, e.g. `<endpoint>?sign=aries&day=today`.
    pub fn request_url(&self, sign: &ZodiacSign) -> String {
        format!("{}?sign={}&day={}", self.endpoint, sign.api_key(), self.day)
    }

    async fn fetch_once(&self, sign: &ZodiacSign) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("sign", sign.api_key().as_str()), ("day", self.day.as_str())])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FortuneError::Transport(e.to_string()))?;

        // Check if the request was successful
        let status = response.status();
        if !status.is_success() {
            return Err(FortuneError::FetchFailure { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FortuneError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|_| FortuneError::InvalidPayload)
    }
}

#[async_trait]
impl HoroscopeSource for HttpHoroscopeSource {
    async fn fetch(&self, sign: &ZodiacSign) -> Result<Value> {
        debug!(url = %self.request_url(sign), "fetching horoscope");

        // Dropping the request future on expiry cancels it
        match tokio::time::timeout(self.timeout, self.fetch_once(sign)).await {
            Ok(result) => result,
            Err(_) => Err(FortuneError::Timeout {
                after_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortune_core::sign_by_key;

    #[test]
    fn request_url_lowercases_sign() {
        let options = ServiceOptions {
            endpoint: "https://example.test/api".into(),
            ..ServiceOptions::default()
        };
        let source = HttpHoroscopeSource::new(&options);
        let sagittarius = sign_by_key("Sagittarius").unwrap();

        assert_eq!(
            source.request_url(sagittarius),
            "https://example.test/api?sign=sagittarius&day=today"
        );
    }
}
