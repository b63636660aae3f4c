//! Integration tests against the real provider.
//!
//! All tests are `#[ignore]` because they require network access and a
//! key with signature verification enabled. Credentials come from the
//! environment (or a `.env` file): `TENCENT_LBS_KEY`, `TENCENT_LBS_SECRET`.
//!
//! Run with:
//! ```bash
//! cargo test --test live_integration -- --ignored
//! ```

use tencent_lbs_sdk::prelude::*;

fn live_client() -> LbsClient {
    dotenvy::dotenv().ok();
    let config = LbsConfig::from_env().expect("TENCENT_LBS_KEY / TENCENT_LBS_SECRET must be set");
    LbsClient::new(config).expect("client should build")
}

#[tokio::test]
#[ignore]
async fn location_to_address() {
    let address = live_client()
        .location_to_address("39.984154,116.307490")
        .await
        .unwrap();
    assert!(address.contains("北京市"), "{address}");
}

#[tokio::test]
#[ignore]
async fn address_to_location() {
    let location = live_client()
        .address_to_location("北京市海淀区彩和坊路海淀西大街74号")
        .await
        .unwrap();
    assert!((39.0..41.0).contains(&location.lat), "{location:?}");
    assert!((115.0..118.0).contains(&location.lng), "{location:?}");
}

#[tokio::test]
#[ignore]
async fn driving_distance() {
    let km = live_client()
        .distance(
            TravelMode::Driving.as_str(),
            "39.983171,116.308479",
            "39.996060,116.353455",
        )
        .await
        .unwrap();
    assert!(km > rust_decimal::Decimal::ZERO);
    assert!(km.scale() == 2);
}

#[tokio::test]
#[ignore]
async fn ip_location() {
    let loc = live_client().ip_location("61.135.17.68").await.unwrap();
    assert_eq!(loc.nation, "中国");
    assert!(!loc.province.is_empty());
}

#[tokio::test]
#[ignore]
async fn bad_key_is_provider_error() {
    let config = LbsConfig::new("invalid-key", "invalid-secret");
    let err = LbsClient::new(config)
        .unwrap()
        .ip_location("61.135.17.68")
        .await
        .unwrap_err();
    assert!(err.provider_status().is_some(), "{err:?}");
}
