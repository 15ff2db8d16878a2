use chrono::{DateTime, NaiveDateTime, Utc};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// Parses timestamps as the remote store and older local snapshots write them:
// RFC 3339, naive ISO without an offset (taken as UTC), or RFC 2822 as
// emitted by http frameworks when serializing datetimes.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(value, DATE_FMT) {
        return Some(DateTime::<Utc>::from_naive_utc_and_offset(date, Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(DateTime::<Utc>::from_naive_utc_and_offset(date, Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date.with_timezone(&Utc));
    }
    None
}

// serde adapter for optional timestamps: written as RFC 3339, read leniently,
// and an unreadable value is treated as missing rather than failing the whole library.
pub mod serializer {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::utils::date::parse_timestamp;

    pub fn serialize<S: Serializer>(time: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error> {
        time.map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        let str_time: Option<String> = Deserialize::deserialize(deserializer)?;
        Ok(str_time.as_deref().and_then(parse_timestamp))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use crate::utils::date::parse_timestamp;

    #[tokio::test]
    async fn test_should_parse_timestamps() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(Some(expected), parse_timestamp("2024-03-01T10:30:00Z"));
        assert_eq!(Some(expected), parse_timestamp("2024-03-01T11:30:00+01:00"));
        assert_eq!(Some(expected), parse_timestamp("2024-03-01T10:30:00.000"));
        assert_eq!(Some(expected), parse_timestamp("2024-03-01 10:30:00"));
        assert_eq!(Some(expected), parse_timestamp("Fri, 01 Mar 2024 10:30:00 GMT"));
    }

    #[tokio::test]
    async fn test_should_reject_unreadable_timestamps() {
        assert_eq!(None, parse_timestamp(""));
        assert_eq!(None, parse_timestamp("yesterday"));
    }
}
