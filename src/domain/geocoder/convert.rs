//! Conversion: Envelope → Address / Location.

use super::wire::{GeocodeResult, ReverseGeocodeResult};
use super::{Address, Location};
use crate::error::LbsError;
use crate::shared::Envelope;

impl From<ReverseGeocodeResult> for Address {
    fn from(source: ReverseGeocodeResult) -> Self {
        Self {
            address: source.address,
            recommend: source.formatted_addresses.and_then(|f| f.recommend),
        }
    }
}

impl From<GeocodeResult> for Location {
    fn from(source: GeocodeResult) -> Self {
        Self {
            location: source.location,
            title: source.title,
            reliability: source.reliability,
            level: source.level,
        }
    }
}

impl TryFrom<Envelope> for Address {
    type Error = LbsError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        Ok(envelope.into_result::<ReverseGeocodeResult>()?.into())
    }
}

impl TryFrom<Envelope> for Location {
    type Error = LbsError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        Ok(envelope.into_result::<GeocodeResult>()?.into())
    }
}
