//! Distance domain — route distance (not straight-line) between coordinates.
//!
//! One origin to many destinations (or many to one) is supported by the
//! provider; `to` may hold several `lat,lng` pairs separated by `;`.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::LatLng;
use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Route calculation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One origin/destination pair of a distance matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDistance {
    /// Route length in kilometers, two decimal places.
    pub distance_km: Decimal,
    /// Estimated travel time in seconds.
    pub duration_secs: f64,
    pub from: Option<LatLng>,
    pub to: Option<LatLng>,
}

/// All route elements, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    pub elements: Vec<RouteDistance>,
}

impl DistanceMatrix {
    /// Kilometers of the first element, or `0.00` when the provider found no route.
    pub fn first_km(&self) -> Decimal {
        self.elements
            .first()
            .map(|e| e.distance_km)
            .unwrap_or_else(|| Decimal::new(0, 2))
    }
}

/// Meters → kilometers, rounded half-up to two decimal places.
///
/// `None` when `meters` is not finite or does not fit a `Decimal`.
pub fn meters_to_km(meters: f64) -> Option<Decimal> {
    let meters = Decimal::from_f64(meters)?;
    let mut km = (meters / Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    km.rescale(2);
    Some(km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_meters_to_km_rounds_to_two_places() {
        assert_eq!(meters_to_km(1234.0), Some(Decimal::from_str("1.23").unwrap()));
        assert_eq!(meters_to_km(1235.0), Some(Decimal::from_str("1.24").unwrap()));
        assert_eq!(meters_to_km(999.0), Some(Decimal::from_str("1.00").unwrap()));
        assert_eq!(meters_to_km(4.0).unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_meters_to_km_keeps_scale() {
        assert_eq!(meters_to_km(2000.0).unwrap().to_string(), "2.00");
        assert_eq!(meters_to_km(10250.0).unwrap().to_string(), "10.25");
    }

    #[test]
    fn test_meters_to_km_rejects_unrepresentable() {
        assert_eq!(meters_to_km(f64::NAN), None);
        assert_eq!(meters_to_km(f64::INFINITY), None);
        assert_eq!(meters_to_km(1e30), None);
    }

    #[test]
    fn test_first_km_on_empty_matrix() {
        let matrix = DistanceMatrix { elements: vec![] };
        assert_eq!(matrix.first_km(), Decimal::ZERO);
        assert_eq!(matrix.first_km().to_string(), "0.00");
    }

    #[test]
    fn test_travel_mode_as_str() {
        assert_eq!(TravelMode::Driving.as_str(), "driving");
        assert_eq!(TravelMode::Walking.to_string(), "walking");
        assert_eq!(
            serde_json::to_string(&TravelMode::Bicycling).unwrap(),
            "\"bicycling\""
        );
    }
}
