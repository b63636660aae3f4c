//! High-level client — `LbsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessors and flat shortcuts for the
//! four core operations.

use crate::config::LbsConfig;
use crate::domain::distance::client::Distances;
use crate::domain::geocoder::client::Geocoder;
use crate::domain::ip_location::client::IpLocator;
use crate::domain::ip_location::IpLocation;
use crate::error::LbsResult;
use crate::http::LbsHttp;
use crate::shared::LatLng;

use rust_decimal::Decimal;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::distance::client::Distances as DistancesClient;
pub use crate::domain::geocoder::client::Geocoder as GeocoderClient;
pub use crate::domain::ip_location::client::IpLocator as IpLocatorClient;

/// The primary entry point for the SDK.
///
/// Holds only the immutable configuration and a reqwest client, so it is
/// cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct LbsClient {
    pub(crate) http: LbsHttp,
}

impl LbsClient {
    /// Build a client with default transport settings.
    pub fn new(config: LbsConfig) -> LbsResult<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: LbsConfig) -> LbsClientBuilder {
        LbsClientBuilder::new(config)
    }

    pub fn config(&self) -> &LbsConfig {
        self.http.config()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn geocoder(&self) -> Geocoder<'_> {
        Geocoder { client: self }
    }

    pub fn distances(&self) -> Distances<'_> {
        Distances { client: self }
    }

    pub fn ip(&self) -> IpLocator<'_> {
        IpLocator { client: self }
    }

    // ── Shortcuts ────────────────────────────────────────────────────────

    /// Coordinate (`"39.984154,116.307490"`) → standard address.
    pub async fn location_to_address(&self, location: &str) -> LbsResult<String> {
        self.geocoder().location_to_address(location).await
    }

    /// Detailed address → coordinate.
    pub async fn address_to_location(&self, address: &str) -> LbsResult<LatLng> {
        self.geocoder().address_to_location(address).await
    }

    /// Route distance in kilometers, two decimal places; `0.00` when no route is found.
    pub async fn distance(&self, mode: &str, from: &str, to: &str) -> LbsResult<Decimal> {
        self.distances().distance(mode, from, to).await
    }

    /// City-level location of an IP address.
    pub async fn ip_location(&self, ip: &str) -> LbsResult<IpLocation> {
        self.ip().locate(ip).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LbsClientBuilder {
    config: LbsConfig,
    timeout: Option<Duration>,
}

impl LbsClientBuilder {
    pub fn new(config: LbsConfig) -> Self {
        Self {
            config,
            timeout: None,
        }
    }

    /// Per-request timeout. Unset by default, which leaves reqwest's behavior
    /// (no timeout) in place.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> LbsResult<LbsClient> {
        self.config.validate()?;
        Ok(LbsClient {
            http: LbsHttp::new(self.config, self.timeout)?,
        })
    }
}
