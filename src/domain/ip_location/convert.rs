//! Conversion: Envelope → IpLocation.

use super::wire::IpLocationResult;
use super::IpLocation;
use crate::error::LbsError;
use crate::shared::Envelope;

impl From<IpLocationResult> for IpLocation {
    fn from(r: IpLocationResult) -> Self {
        Self {
            ip: r.ip,
            nation: r.ad_info.nation,
            province: r.ad_info.province,
            city: r.ad_info.city,
            district: r.ad_info.district,
            adcode: r.ad_info.adcode,
            lat: r.location.lat,
            lng: r.location.lng,
        }
    }
}

impl TryFrom<Envelope> for IpLocation {
    type Error = LbsError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        Ok(envelope.into_result::<IpLocationResult>()?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ip_location_flattens_ad_info() {
        let env = envelope(json!({
            "status": 0,
            "message": "query ok",
            "result": {
                "ip": "61.135.17.68",
                "location": {"lat": 39.90469, "lng": 116.40717},
                "ad_info": {
                    "nation": "中国",
                    "province": "北京市",
                    "city": "北京市",
                    "district": "",
                    "adcode": 110000
                }
            }
        }));

        let loc = IpLocation::try_from(env).unwrap();
        assert_eq!(loc.ip, "61.135.17.68");
        assert_eq!(loc.nation, "中国");
        assert_eq!(loc.province, "北京市");
        assert_eq!(loc.city, "北京市");
        assert_eq!(loc.adcode, 110000);
        assert_eq!(loc.lat, 39.90469);
        assert_eq!(loc.lng, 116.40717);
    }

    #[test]
    fn test_ip_location_abroad_defaults() {
        let env = envelope(json!({
            "status": 0,
            "message": "query ok",
            "result": {
                "ip": "8.8.8.8",
                "location": {"lat": 37.751, "lng": -97.822},
                "ad_info": {"nation": "美国"}
            }
        }));

        let loc = IpLocation::try_from(env).unwrap();
        assert_eq!(loc.nation, "美国");
        assert_eq!(loc.city, "");
        assert_eq!(loc.adcode, -1);
    }

    #[test]
    fn test_ip_location_nonzero_status() {
        let env = envelope(json!({"status": 375, "message": "局域网IP无法定位"}));
        let err = IpLocation::try_from(env).unwrap_err();
        assert_eq!(err.provider_status(), Some(375));
        assert!(matches!(err, LbsError::Provider { message, .. } if message == "局域网IP无法定位"));
    }
}
