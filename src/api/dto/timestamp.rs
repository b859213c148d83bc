//! ISO-8601 timestamp formatting shared by response DTOs.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats as `2025-01-01T12:00:00.000Z`.
pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde `serialize_with` adapter for [`format`].
pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(value))
}
