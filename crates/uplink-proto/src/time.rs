//! Conversions between [`chrono`] datetimes and protobuf [`Timestamp`]s.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Converts a UTC datetime into a protobuf timestamp.
pub fn from_datetime(value: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: value.timestamp(),
        nanos: value.timestamp_subsec_nanos() as i32,
    }
}

/// Converts an optional UTC datetime, mapping `None` to an unset field.
pub fn from_optional(value: Option<DateTime<Utc>>) -> Option<Timestamp> {
    value.map(from_datetime)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn converts_whole_seconds() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap();
        let ts = from_datetime(dt);
        assert_eq!(ts.seconds, dt.timestamp());
        assert_eq!(ts.nanos, 0);
    }

    #[test]
    fn preserves_subsecond_nanos() {
        let dt = Utc
            .with_ymd_and_hms(2024, 5, 17, 12, 30, 45)
            .unwrap()
            .checked_add_signed(chrono::Duration::nanoseconds(123_456_789))
            .unwrap();
        let ts = from_datetime(dt);
        assert_eq!(ts.nanos, 123_456_789);
    }

    #[test]
    fn optional_none_stays_unset() {
        assert_eq!(from_optional(None), None);
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(from_optional(Some(dt)).is_some());
    }
}
