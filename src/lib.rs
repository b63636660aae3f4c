//! # Tencent LBS SDK
//!
//! A Rust client for the Tencent Location-Based Service web API:
//! geocoding (address ↔ coordinate), route distance and IP location.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Envelope, typed results, conversions, errors, configuration
//! 2. **Signing** — Canonical query string + MD5 request signature
//! 3. **HTTP** — `LbsHttp`: sign, dispatch, parse the envelope
//! 4. **High-Level Client** — `LbsClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tencent_lbs_sdk::prelude::*;
//!
//! let client = LbsClient::new(LbsConfig::from_env()?)?;
//!
//! let address = client.location_to_address("39.984154,116.307490").await?;
//! let km = client
//!     .distance("driving", "39.071510,117.190091", "39.840177,116.463318")
//!     .await?;
//! let city = client.ip_location("61.135.17.68").await?.city;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Envelope, coordinates and request parameters.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Endpoint and parameter-name constants.
pub mod network;

/// Immutable provider configuration.
pub mod config;

// ── Layer 2: Signing ─────────────────────────────────────────────────────────

/// Request signature.
pub mod sign;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Signed GET transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `LbsClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Envelope, LatLng, Params};

    // Domain types
    pub use crate::domain::distance::{DistanceMatrix, RouteDistance, TravelMode};
    pub use crate::domain::geocoder::{Address, Location};
    pub use crate::domain::ip_location::IpLocation;

    // Errors
    pub use crate::error::{HttpError, LbsError, LbsResult};

    // Configuration + network
    pub use crate::config::LbsConfig;
    pub use crate::network::DEFAULT_DOMAIN;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        DistancesClient, GeocoderClient, IpLocatorClient, LbsClient, LbsClientBuilder,
    };
}
