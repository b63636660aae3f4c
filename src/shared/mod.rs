//! Shared types used across all domain modules.
//!
//! The [`Envelope`] is the outer wrapper every provider endpoint returns;
//! domain modules turn its `result` into their own typed results.

use crate::error::{LbsError, LbsResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request parameters, kept sorted by key so signing sees a stable order.
pub type Params = BTreeMap<String, String>;

// ─── Envelope ────────────────────────────────────────────────────────────────

/// Generic `{status, message, result}` wrapper.
///
/// `status == 0` means success. The provider omits `result` on errors, so it
/// defaults to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Fail with [`LbsError::Provider`] unless `status == 0`.
    pub fn ensure_success(&self) -> LbsResult<()> {
        if self.is_success() {
            return Ok(());
        }
        tracing::warn!(
            status = self.status,
            request_id = self.request_id.as_deref().unwrap_or(""),
            "Provider rejected request: {}",
            self.message
        );
        Err(LbsError::Provider {
            status: self.status,
            message: self.message.clone(),
        })
    }

    /// Check the status, then deserialize `result` into `T`.
    pub fn into_result<T: DeserializeOwned>(self) -> LbsResult<T> {
        self.ensure_success()?;
        serde_json::from_value(self.result).map_err(|e| LbsError::Provider {
            status: self.status,
            message: format!("Unexpected result payload: {}", e),
        })
    }
}

// ─── LatLng ──────────────────────────────────────────────────────────────────

/// A WGS-84/GCJ-02 coordinate as the provider reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Render as the `"lat,lng"` parameter form the provider expects.
    pub fn to_param(&self) -> String {
        format!("{:.6},{:.6}", self.lat, self.lng)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_param())
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Reject input made only of blank characters.
///
/// Besides Unicode whitespace, a byte-order mark, NUL and the invisible
/// filler characters (Hangul filler, braille blank, bidi embedding,
/// Mongolian vowel separator) count as blank.
pub(crate) fn require_non_blank(value: &str, field: &str) -> LbsResult<()> {
    if value.chars().all(is_blank_char) {
        return Err(LbsError::blank(field));
    }
    Ok(())
}

fn is_blank_char(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '\u{feff}' | '\0' | '\u{202a}' | '\u{3164}' | '\u{2800}' | '\u{180e}'
        )
}
