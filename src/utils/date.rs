use chrono::{DateTime, NaiveDateTime};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// accepts both the stored DATE_FMT form and RFC 3339 with an offset
pub fn parse_date(str_time: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDateTime::parse_from_str(str_time, DATE_FMT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(str_time).ok().map(|d| d.naive_utc())
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::parse_date;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.and_utc().to_rfc3339().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        parse_date(str_time.as_str())
            .ok_or_else(|| D::Error::custom(format!("invalid date {}", str_time)))
    }
}
