//! Serde helpers for the backend's loose JSON conventions
//!
//! Ids arrive as numbers or strings, decimals as strings, times with or
//! without seconds. These adapters accept every form seen on the wire and
//! always serialize one canonical form.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Id as a string, from a JSON number or string.
pub fn id_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match NumberOrText::deserialize(d)? {
        NumberOrText::Int(i) => Ok(i.to_string()),
        NumberOrText::Float(f) => Ok(format!("{}", f)),
        NumberOrText::Text(s) => Ok(s),
    }
}

pub fn opt_id_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    match Option::<NumberOrText>::deserialize(d)? {
        None => Ok(None),
        Some(NumberOrText::Int(i)) => Ok(Some(i.to_string())),
        Some(NumberOrText::Float(f)) => Ok(Some(format!("{}", f))),
        Some(NumberOrText::Text(s)) if s.is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => Ok(Some(s)),
    }
}

/// `T::default()` for a missing key or an explicit `null`.
pub fn null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/// Decimal from a JSON number or a decimal string (`"1200.50"`).
pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match NumberOrText::deserialize(d)? {
        NumberOrText::Int(i) => Ok(i as f64),
        NumberOrText::Float(f) => Ok(f),
        NumberOrText::Text(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

pub fn opt_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrText>::deserialize(d)? {
        None => Ok(None),
        Some(NumberOrText::Int(i)) => Ok(Some(i as f64)),
        Some(NumberOrText::Float(f)) => Ok(Some(f)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().map(Some).map_err(D::Error::custom),
    }
}

pub(crate) fn parse_time(s: &str) -> Option<NaiveTime> {
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s.trim(), fmt).ok())
}

/// `HH:MM` on the way out, `HH:MM[:SS[.f]]` on the way in.
pub mod hm_time {
    use super::*;

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time: {}", raw)))
    }
}

pub mod opt_hm_time {
    use super::*;

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&t.format("%H:%M").to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_time(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid time: {}", raw))),
        }
    }
}

/// RFC 3339 timestamps, or naive ones which are taken as UTC.
pub fn opt_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(d)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Loose {
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(deserialize_with = "number")]
        amount: f64,
        #[serde(with = "hm_time")]
        at: NaiveTime,
        #[serde(default, deserialize_with = "opt_timestamp")]
        stamp: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_loose_values() {
        let p: Loose = serde_json::from_str(
            r#"{"id": 17, "amount": "1200.50", "at": "09:15:00", "stamp": "2024-05-01T08:00:00"}"#,
        )
        .unwrap();
        assert_eq!(p.id, "17");
        assert_eq!(p.amount, 1200.5);
        assert_eq!(p.at, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        assert_eq!(p.stamp.unwrap().to_rfc3339(), "2024-05-01T08:00:00+00:00");
    }

    #[test]
    fn test_offset_timestamp_and_missing() {
        let p: Loose = serde_json::from_str(r#"{"id": "a1", "amount": 3, "at": "18:00"}"#).unwrap();
        assert_eq!(p.id, "a1");
        assert!(p.stamp.is_none());

        let p: Loose = serde_json::from_str(
            r#"{"id": 1, "amount": 1.5, "at": "18:00", "stamp": "2024-05-01T10:00:00+02:00"}"#,
        )
        .unwrap();
        assert_eq!(p.stamp.unwrap().to_rfc3339(), "2024-05-01T08:00:00+00:00");
    }

    #[derive(Deserialize)]
    struct Named {
        #[serde(default, deserialize_with = "null_default")]
        label: String,
        #[serde(default, deserialize_with = "null_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_becomes_default() {
        let n: Named = serde_json::from_str(r#"{"label": null, "tags": null}"#).unwrap();
        assert_eq!(n.label, "");
        assert!(n.tags.is_empty());

        let n: Named = serde_json::from_str(r#"{"label": "x"}"#).unwrap();
        assert_eq!(n.label, "x");
        assert!(n.tags.is_empty());
    }
}
