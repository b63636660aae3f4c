//! IP location domain — city-level position of a terminal's IP address.
//!
//! Meant for non-precise positioning such as showing local weather or
//! picking a default city.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::LatLng;
use serde::{Deserialize, Serialize};

/// Where an IP address is, down to city level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpLocation {
    pub ip: String,
    pub nation: String,
    pub province: String,
    pub city: String,
    pub district: String,
    /// Administrative division code; `-1` outside mainland China.
    pub adcode: i64,
    pub lat: f64,
    pub lng: f64,
}

impl IpLocation {
    pub fn lat_lng(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}
