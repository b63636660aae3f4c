//! Geocoder domain — coordinate → address and address → coordinate.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::LatLng;
use serde::{Deserialize, Serialize};

/// Reverse-geocoding result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Standard address, e.g. `"北京市海淀区北四环西路66号"`.
    pub address: String,
    /// The provider's recommended short form, when present.
    pub recommend: Option<String>,
}

/// Forward-geocoding result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub location: LatLng,
    pub title: Option<String>,
    /// Provider confidence, 1-10.
    pub reliability: Option<u8>,
    /// Precision level of the match (street, POI, ...).
    pub level: Option<i32>,
}
