use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::Result;

/// Current UTC time truncated to whole seconds.
pub fn utc_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// RFC 3339 with a `+00:00` offset. Sub-second digits only when non-zero, so
/// text order matches time order for everything this crate writes.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Parses a stored timestamp; offset-less values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Ok(ts.with_timezone(&Utc)),
        Err(_) => {
            let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")?;
            Ok(naive.and_utc())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_whole_seconds_with_offset() {
        let ts = Utc.with_ymd_and_hms(2026, 2, 25, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2026-02-25T10:00:00+00:00");
    }

    #[test]
    fn parses_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2026, 2, 25, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2026-02-25T10:00:00+00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2026-02-25T10:00:00").unwrap(), expected);
        assert!(parse_timestamp("yesterday").is_err());
    }
}
