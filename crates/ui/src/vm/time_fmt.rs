use chrono::{DateTime, SecondsFormat, Utc};

/// RFC 3339 with whole seconds and a `Z` suffix.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}
