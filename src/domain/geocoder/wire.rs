//! Wire types for geocoder `result` payloads.

use crate::shared::LatLng;
use serde::{Deserialize, Serialize};

/// `result` of a reverse geocode (`location=` query).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReverseGeocodeResult {
    pub address: String,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub formatted_addresses: Option<FormattedAddresses>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedAddresses {
    #[serde(default)]
    pub recommend: Option<String>,
    #[serde(default)]
    pub rough: Option<String>,
}

/// `result` of a forward geocode (`address=` query).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResult {
    pub location: LatLng,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub reliability: Option<u8>,
    #[serde(default)]
    pub level: Option<i32>,
}
