//! Time related utils.

use chrono::SecondsFormat;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO-8601 with separators and a `Z` suffix: "2022-03-13T07:20:04Z"
///
/// Fractional seconds are dropped, this is the form the storage service
/// expects in the `se` parameter of a shared access signature.
pub fn format_iso8601(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
