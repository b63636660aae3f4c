//! Wire types for distance matrix `result` payloads.

use crate::shared::LatLng;
use serde::{Deserialize, Serialize};

/// `result` of the distance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistanceResult {
    #[serde(default)]
    pub elements: Vec<DistanceElement>,
}

/// A single route element. `distance` is in meters, `duration` in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistanceElement {
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub from: Option<LatLng>,
    #[serde(default)]
    pub to: Option<LatLng>,
}
