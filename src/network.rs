//! Network constants for the Tencent LBS web service.

/// Default web service domain.
pub const DEFAULT_DOMAIN: &str = "https://apis.map.qq.com";

/// Geocoder endpoint. Serves both directions: `location=` (reverse) and `address=` (forward).
pub const GEOCODER_API: &str = "/ws/geocoder/v1/";

/// Distance matrix endpoint.
pub const DISTANCE_API: &str = "/ws/distance/v1/";

/// IP location endpoint.
pub const IP_API: &str = "/ws/location/v1/ip";

// Query parameter names.
pub const LOCATION: &str = "location";
pub const ADDRESS: &str = "address";
pub const MODE: &str = "mode";
pub const FROM: &str = "from";
pub const TO: &str = "to";
pub const IP: &str = "ip";
pub const KEY: &str = "key";
pub const SIG: &str = "sig";
