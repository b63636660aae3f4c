//! Wire types for IP location `result` payloads.

use crate::shared::LatLng;
use serde::{Deserialize, Serialize};

/// `result` of the IP location endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IpLocationResult {
    #[serde(default)]
    pub ip: String,
    pub location: LatLng,
    pub ad_info: AdInfo,
}

/// Administrative-division info. Fields below nation are empty for
/// addresses the provider cannot narrow down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdInfo {
    #[serde(default)]
    pub nation: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default = "unknown_adcode")]
    pub adcode: i64,
}

fn unknown_adcode() -> i64 {
    -1
}
