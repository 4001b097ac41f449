use chrono::{Local, TimeZone};

const DISPLAY_FORMAT: &str = "%H:%M %d.%m.%Y";

/// Formats an epoch-millisecond timestamp as `HH:MM DD.MM.YYYY` in local time.
pub fn format_timestamp(millis: i64) -> Option<String> {
    format_timestamp_in(millis, &Local)
}

/// Same as [`format_timestamp`], for an explicit timezone.
pub fn format_timestamp_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<String> {
    tz.timestamp_millis_opt(millis)
        .earliest()
        .map(|time| time.naive_local().format(DISPLAY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn epoch_in_utc() {
        assert_eq!(format_timestamp_in(0, &Utc).as_deref(), Some("00:00 01.01.1970"));
    }

    #[test]
    fn fields_are_zero_padded() {
        // 1970-02-03 04:05 UTC
        let millis = ((33 * 24 + 4) * 60 + 5) * 60 * 1000;
        assert_eq!(
            format_timestamp_in(millis, &Utc).as_deref(),
            Some("04:05 03.02.1970")
        );
    }

    #[test]
    fn uses_timezone_fields() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            format_timestamp_in(0, &tz).as_deref(),
            Some("03:00 01.01.1970")
        );
    }

    #[test]
    fn local_format_has_expected_shape() {
        let formatted = format_timestamp(1_700_000_000_000).unwrap();
        assert_eq!(formatted.len(), "HH:MM DD.MM.YYYY".len());
        assert_eq!(&formatted[2..3], ":");
        assert_eq!(&formatted[5..6], " ");
    }
}
