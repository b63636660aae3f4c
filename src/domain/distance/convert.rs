//! Conversion: Envelope → DistanceMatrix.

use super::wire::{DistanceElement, DistanceResult};
use super::{meters_to_km, DistanceMatrix, RouteDistance};
use crate::error::LbsError;
use crate::shared::Envelope;

impl TryFrom<DistanceElement> for RouteDistance {
    type Error = LbsError;

    fn try_from(e: DistanceElement) -> Result<Self, Self::Error> {
        let distance_km = meters_to_km(e.distance).ok_or_else(|| LbsError::Provider {
            status: 0,
            message: format!("Distance out of range: {} m", e.distance),
        })?;
        Ok(Self {
            distance_km,
            duration_secs: e.duration,
            from: e.from,
            to: e.to,
        })
    }
}

impl TryFrom<DistanceResult> for DistanceMatrix {
    type Error = LbsError;

    fn try_from(r: DistanceResult) -> Result<Self, Self::Error> {
        let elements = r
            .elements
            .into_iter()
            .map(RouteDistance::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { elements })
    }
}

impl TryFrom<Envelope> for DistanceMatrix {
    type Error = LbsError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        envelope.into_result::<DistanceResult>()?.try_into()
    }
}
