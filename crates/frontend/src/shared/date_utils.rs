/// Utilities for date and time formatting
///
/// Card timestamps arrive as ISO strings and are shown in the viewer's local time.
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const CREATED_FORMAT: &str = "%d.%m.%Y at %H:%M";

/// Format an ISO datetime in the browser's local time zone.
/// Example: "2024-03-15T14:02:26Z" -> "15.03.2024 at 17:02" (UTC+3)
pub fn format_created(iso: &str) -> String {
    format_created_in(iso, &Local)
}

/// Same as [`format_created`] for an explicit time zone.
///
/// Offsets in the input are honoured; a naive datetime is taken as already
/// being in `tz`. Anything unparseable is returned unchanged.
pub fn format_created_in<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.with_timezone(tz).format(CREATED_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(CREATED_FORMAT).to_string();
    }
    iso.to_string()
}

/// Parse an ISO datetime to UTC, if it carries an offset
pub fn parse_utc(iso: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(iso)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Relative age, e.g. "3 hours ago"
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    const UNITS: [(i64, &str); 5] = [
        (31_536_000, "years"),
        (2_592_000, "months"),
        (86_400, "days"),
        (3_600, "hours"),
        (60, "minutes"),
    ];
    for (size, name) in UNITS {
        if seconds > size {
            return format!("{} {} ago", seconds / size, name);
        }
    }
    format!("{} seconds ago", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_created_converts_offset() {
        let utc_plus_3 = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            format_created_in("2024-03-15T14:02:26.123Z", &utc_plus_3),
            "15.03.2024 at 17:02"
        );
        assert_eq!(
            format_created_in("2024-12-31T23:59:59+00:00", &Utc),
            "31.12.2024 at 23:59"
        );
    }

    #[test]
    fn test_format_created_naive() {
        assert_eq!(
            format_created_in("2024-03-15T14:02:26.123456", &Utc),
            "15.03.2024 at 14:02"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_created_in("invalid", &Utc), "invalid");
        assert_eq!(parse_utc("invalid"), None);
    }

    #[test]
    fn test_time_ago() {
        let now = parse_utc("2024-03-15T12:00:00Z").unwrap();
        let at = |iso: &str| parse_utc(iso).unwrap();
        assert_eq!(time_ago(at("2024-03-15T11:59:30Z"), now), "30 seconds ago");
        assert_eq!(time_ago(at("2024-03-15T09:00:00Z"), now), "3 hours ago");
        assert_eq!(time_ago(at("2024-03-10T12:00:00Z"), now), "5 days ago");
        assert_eq!(time_ago(at("2022-03-15T12:00:00Z"), now), "2 years ago");
    }
}
