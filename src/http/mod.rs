//! HTTP client layer — `LbsHttp`.

pub mod client;

pub use client::LbsHttp;
