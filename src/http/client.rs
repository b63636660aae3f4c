//! Low-level HTTP client — `LbsHttp`.
//!
//! Signs the parameter set, issues one GET and parses the body into an
//! [`Envelope`]. The envelope is returned unchecked; status handling and
//! mapping to typed results happen in the domain sub-clients.
//!
//! Every failure is returned to the caller as-is. Requests are never
//! retried, and no timeout is set unless the caller asks for one.

use crate::config::LbsConfig;
use crate::error::HttpError;
use crate::network::SIG;
use crate::shared::{Envelope, Params};
use crate::sign;

use reqwest::Client;
use std::time::Duration;

/// Low-level HTTP client for the LBS web service.
#[derive(Debug, Clone)]
pub struct LbsHttp {
    config: LbsConfig,
    client: Client,
}

impl LbsHttp {
    /// Build the transport. `timeout` of `None` keeps reqwest's default (no timeout).
    pub fn new(config: LbsConfig, timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &LbsConfig {
        &self.config
    }

    /// Sign `params` for `uri` and build the full request URL.
    ///
    /// Adds `key` and `sig` to the query string; values are URL-encoded
    /// after signing.
    pub fn signed_url(&self, uri: &str, mut params: Params) -> Result<String, HttpError> {
        let sig = sign::sign_get_request(
            uri,
            self.config.app_secret(),
            self.config.app_key(),
            &mut params,
        );
        params.insert(SIG.to_string(), sig);
        let query = serde_urlencoded::to_string(&params)?;
        Ok(format!("{}{}?{}", self.config.domain(), uri, query))
    }

    /// Dispatch a signed GET to `uri` and parse the envelope.
    pub async fn get_envelope(&self, uri: &str, params: Params) -> Result<Envelope, HttpError> {
        tracing::debug!(
            uri,
            params = ?params.keys().collect::<Vec<_>>(),
            "Dispatching LBS request"
        );
        let url = self.signed_url(uri, params)?;
        self.do_request(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn do_request(&self, url: &str) -> Result<Envelope, HttpError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.text().await?;
            return Ok(serde_json::from_str::<Envelope>(&body)?);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after_ms);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 | 403 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

/// `Retry-After` in delta-seconds → milliseconds, saturating on huge values.
fn parse_retry_after_ms(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}
