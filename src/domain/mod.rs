//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Typed results returned to callers
//! - `wire.rs` — Raw serde structs matching the envelope's `result`
//! - `convert.rs` — `From`/`TryFrom<Envelope>` conversions
//! - `client.rs` — Sub-client with the HTTP operations

pub mod distance;
pub mod geocoder;
pub mod ip_location;
