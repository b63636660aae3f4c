//! Geocoder sub-client — reverse and forward geocoding.

use crate::client::LbsClient;
use crate::domain::geocoder::{Address, Location};
use crate::error::LbsResult;
use crate::network::{ADDRESS, GEOCODER_API, LOCATION};
use crate::shared::{require_non_blank, LatLng, Params};

/// Sub-client for geocoder operations.
pub struct Geocoder<'a> {
    pub(crate) client: &'a LbsClient,
}

impl<'a> Geocoder<'a> {
    /// Resolve a `"lat,lng"` coordinate to its standard address.
    pub async fn location_to_address(&self, location: &str) -> LbsResult<String> {
        Ok(self.reverse(location).await?.address)
    }

    /// Reverse geocode, keeping the provider's recommended short form.
    pub async fn reverse(&self, location: &str) -> LbsResult<Address> {
        require_non_blank(location, LOCATION)?;
        let params = Params::from([(LOCATION.to_string(), location.to_string())]);
        let envelope = self.client.http.get_envelope(GEOCODER_API, params).await?;
        Address::try_from(envelope)
    }

    /// Resolve a detailed address to a coordinate.
    pub async fn address_to_location(&self, address: &str) -> LbsResult<LatLng> {
        Ok(self.geocode(address).await?.location)
    }

    /// Forward geocode, keeping the match title and reliability.
    pub async fn geocode(&self, address: &str) -> LbsResult<Location> {
        require_non_blank(address, ADDRESS)?;
        let params = Params::from([(ADDRESS.to_string(), address.to_string())]);
        let envelope = self.client.http.get_envelope(GEOCODER_API, params).await?;
        Location::try_from(envelope)
    }
}
