//! IP locator sub-client.

use crate::client::LbsClient;
use crate::domain::ip_location::IpLocation;
use crate::error::LbsResult;
use crate::network::{IP, IP_API};
use crate::shared::{require_non_blank, Params};

/// Sub-client for IP location.
pub struct IpLocator<'a> {
    pub(crate) client: &'a LbsClient,
}

impl<'a> IpLocator<'a> {
    /// Locate `ip` (e.g. `"61.135.17.68"`) to city level.
    pub async fn locate(&self, ip: &str) -> LbsResult<IpLocation> {
        require_non_blank(ip, IP)?;
        let params = Params::from([(IP.to_string(), ip.to_string())]);
        let envelope = self.client.http.get_envelope(IP_API, params).await?;
        IpLocation::try_from(envelope)
    }
}
