use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SightingKind {
    Blob,
    LampShade,
}

impl SightingKind {
    pub const ALL: [SightingKind; 2] = [SightingKind::Blob, SightingKind::LampShade];

    pub fn display_name(&self) -> &'static str {
        match self {
            SightingKind::Blob => "Blob",
            SightingKind::LampShade => "Lamp Shade",
        }
    }
}

/// One sighting entry. Immutable once constructed; the list mutates by
/// remove/insert, never by field update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sighting {
    /// Unique across the live list; the presentation layer's stable list key.
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub kind: SightingKind,
    /// Speed in knots.
    pub speed: u32,
}
