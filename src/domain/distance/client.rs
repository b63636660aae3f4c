//! Distances sub-client — route distance calculation.

use crate::client::LbsClient;
use crate::domain::distance::DistanceMatrix;
use crate::error::LbsResult;
use crate::network::{DISTANCE_API, FROM, MODE, TO};
use crate::shared::{require_non_blank, Params};
use rust_decimal::Decimal;

/// Sub-client for distance operations.
pub struct Distances<'a> {
    pub(crate) client: &'a LbsClient,
}

impl<'a> Distances<'a> {
    /// Route distance in kilometers (two decimal places) of the first element.
    ///
    /// Returns `0.00` when the provider reports no route.
    ///
    /// # Arguments
    ///
    /// * `mode` - `driving`, `walking` or `bicycling` (see [`TravelMode`](super::TravelMode))
    /// * `from` - origin, e.g. `"39.071510,117.190091"`
    /// * `to` - destination(s), `lat,lng` pairs separated by `;`
    pub async fn distance(&self, mode: &str, from: &str, to: &str) -> LbsResult<Decimal> {
        Ok(self.matrix(mode, from, to).await?.first_km())
    }

    /// Every route element the provider returns, in order.
    pub async fn matrix(&self, mode: &str, from: &str, to: &str) -> LbsResult<DistanceMatrix> {
        require_non_blank(mode, MODE)?;
        require_non_blank(from, FROM)?;
        require_non_blank(to, TO)?;

        let params = Params::from([
            (MODE.to_string(), mode.to_string()),
            (FROM.to_string(), from.to_string()),
            (TO.to_string(), to.to_string()),
        ]);
        let envelope = self.client.http.get_envelope(DISTANCE_API, params).await?;
        DistanceMatrix::try_from(envelope)
    }
}
