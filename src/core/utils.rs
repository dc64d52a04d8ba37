use chrono::{DateTime, SecondsFormat, Utc};

/// ISO 8601 rendering used in every response body, e.g. `2025-01-31T08:15:00.123Z`.
pub fn datetime_to_string(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Treats an empty string the same as an absent value.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|x| !x.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{datetime_to_string, non_empty};

    #[test]
    fn test_datetime_to_string() {
        let datetime = Utc.with_ymd_and_hms(2025, 1, 31, 8, 15, 0).unwrap();
        assert_eq!(datetime_to_string(datetime), "2025-01-31T08:15:00.000Z");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }
}
