// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lenient ISO 8601 timestamp handling.
//!
//! Snapshot timestamps arrive in whatever shape the backend or an admin
//! form produced. Accepted inputs:
//!
//! - RFC 3339 (`2025-01-01T00:00:00Z`, `2025-01-01T00:00:00.5+02:00`)
//! - The same with a space separator (`2025-01-01 00:00:00+00:00`)
//! - Offset-less date-times, with or without seconds (read as UTC)
//! - Bare dates (`2025-01-01`, midnight UTC)
//!
//! Anything else is treated as absent. Parsing never fails loudly.

use std::borrow::Cow;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Parses a snapshot timestamp, returning `None` for malformed input.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = normalize_separator(trimmed);
    if let Ok(parsed) = OffsetDateTime::parse(&normalized, &Rfc3339) {
        return Some(parsed);
    }

    parse_naive(&normalized).map(PrimitiveDateTime::assume_utc)
}

/// Formats a timestamp as RFC 3339.
///
/// Returns `None` for years RFC 3339 cannot represent.
#[must_use]
pub fn format_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    timestamp.format(&Rfc3339).ok()
}

/// Replaces a space (or lowercase `t`) date/time separator with `T`.
fn normalize_separator(s: &str) -> Cow<'_, str> {
    match s.as_bytes().get(10) {
        Some(b' ' | b't') => Cow::Owned(format!("{}T{}", &s[..10], &s[11..])),
        _ => Cow::Borrowed(s),
    }
}

fn parse_naive(s: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        s,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
    })
    .or_else(|_| Date::parse(s, format_description!("[year]-[month]-[day]")).map(Date::midnight))
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_parse_rfc3339_utc() {
        assert_eq!(
            parse_timestamp("2025-01-01T00:00:00Z"),
            Some(datetime!(2025-01-01 0:00 UTC))
        );
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp("2025-01-01T02:00:00+02:00"),
            Some(datetime!(2025-01-01 0:00 UTC))
        );
    }

    #[test]
    fn test_parse_space_separator() {
        assert_eq!(
            parse_timestamp("2025-06-30 12:30:00+00:00"),
            Some(datetime!(2025-06-30 12:30 UTC))
        );
    }

    #[test]
    fn test_parse_fractional_seconds() {
        assert_eq!(
            parse_timestamp("2025-06-30T12:30:00.250Z"),
            Some(datetime!(2025-06-30 12:30:00.25 UTC))
        );
        assert_eq!(
            parse_timestamp("2025-06-30T12:30:00.250"),
            Some(datetime!(2025-06-30 12:30:00.25 UTC))
        );
    }

    #[test]
    fn test_parse_offsetless_reads_as_utc() {
        assert_eq!(
            parse_timestamp("2025-06-30T12:30:00"),
            Some(datetime!(2025-06-30 12:30 UTC))
        );
        assert_eq!(
            parse_timestamp("2025-06-30T12:30"),
            Some(datetime!(2025-06-30 12:30 UTC))
        );
    }

    #[test]
    fn test_parse_bare_date() {
        assert_eq!(
            parse_timestamp("2099-01-01"),
            Some(datetime!(2099-01-01 0:00 UTC))
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("tomorrow").is_none());
        assert!(parse_timestamp("2025-13-01").is_none());
        assert!(parse_timestamp("01/02/2025").is_none());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(datetime!(2025-01-01 0:00 UTC)).as_deref(),
            Some("2025-01-01T00:00:00Z")
        );
    }
}
