//! Translation of event fields into API query parameters.
//!
//! Each query scenario describes its parameters with a translation scheme:
//! an ordered list of output parameter names, each backed either by a
//! literal event field or by a derived time-window boundary.

use chrono::{Duration, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use tracing::debug;

use crate::error::{LookupError, Result};
use crate::event::Event;

/// Event timestamp format: local wall-clock time, no zone designator.
const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// API timestamp format: UTC ISO-8601 with a literal `Z`.
const API_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Where a query parameter's value comes from.
#[derive(Debug, Clone)]
pub enum ParamSource {
    /// Copy the named event field verbatim (skipped when absent).
    Field(&'static str),
    /// Lower bound of the derived time window.
    TimestampGte,
    /// Upper bound of the derived time window.
    TimestampLte,
}

/// An ordered mapping from output parameter name to its source.
pub type TranslationScheme = [(&'static str, ParamSource)];

/// Convert an event timestamp into a `(gte, lte)` window of half-width
/// `n` seconds.
///
/// The event timestamp is interpreted as local time and converted to UTC.
/// Events recorded in UTC therefore come out shifted by the local offset;
/// the original tool behaves the same way and analysts rely on matching
/// its windows exactly.
pub fn timestamp_range(timestamp: &str, n: i64) -> Result<(String, String)> {
    let naive = NaiveDateTime::parse_from_str(timestamp, EVENT_TIME_FORMAT).map_err(|e| {
        LookupError::Timestamp {
            value: timestamp.to_string(),
            reason: e.to_string(),
        }
    })?;
    let local = match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            return Err(LookupError::Timestamp {
                value: timestamp.to_string(),
                reason: "does not exist in the local time zone".to_string(),
            })
        }
    };
    let utc = local.with_timezone(&Utc);
    let gte = (utc - Duration::seconds(n)).format(API_TIME_FORMAT).to_string();
    let lte = (utc + Duration::seconds(n)).format(API_TIME_FORMAT).to_string();
    Ok((gte, lte))
}

/// Build query parameters for one scheme and time-window half-width.
///
/// Scheme entries whose event field is missing are omitted without error.
pub fn build_params(event: &Event, scheme: &TranslationScheme, n: i64) -> Result<Vec<(String, String)>> {
    let mut params = Vec::with_capacity(scheme.len());

    for (name, source) in scheme {
        match source {
            ParamSource::Field(field) => {
                if let Some(value) = event.get(*field).and_then(param_value) {
                    params.push((name.to_string(), value));
                }
            }
            ParamSource::TimestampGte | ParamSource::TimestampLte => {
                let Some(ts) = event.get("timestamp").and_then(Value::as_str) else {
                    continue;
                };
                let (gte, lte) = timestamp_range(ts, n)?;
                let bound = match source {
                    ParamSource::TimestampGte => gte,
                    _ => lte,
                };
                params.push((name.to_string(), bound));
            }
        }
    }

    debug!(count = params.len(), "built query parameters");
    Ok(params)
}

/// Render an event value as a query parameter value.
///
/// Strings are copied verbatim; numbers and booleans use their canonical
/// textual form. Structured values make no sense as a query parameter and
/// are skipped like a missing field.
fn param_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample_event() -> Event {
        serde_json::from_str(
            r#"{
                "src_ip": "10.0.0.7",
                "src_port": 49153,
                "dst_ip": "192.0.2.44",
                "dst_port": 443,
                "proto": "tcp",
                "timestamp": "2021-01-01 00:00:00"
            }"#,
        )
        .unwrap()
    }

    fn session_scheme() -> Vec<(&'static str, ParamSource)> {
        vec![
            ("ip", ParamSource::Field("src_ip")),
            ("port", ParamSource::Field("src_port")),
            ("connected_ip", ParamSource::Field("dst_ip")),
            ("connected_port", ParamSource::Field("dst_port")),
            ("protocol", ParamSource::Field("proto")),
            ("start_timestamp_utc__gte", ParamSource::TimestampGte),
            ("start_timestamp_utc__lte", ParamSource::TimestampLte),
        ]
    }

    fn parse_api_time(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_full_event_produces_full_parameter_set() {
        let params = build_params(&sample_event(), &session_scheme(), 5).unwrap();
        let names: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            names,
            [
                "ip",
                "port",
                "connected_ip",
                "connected_port",
                "protocol",
                "start_timestamp_utc__gte",
                "start_timestamp_utc__lte",
            ]
        );
        assert_eq!(params[0].1, "10.0.0.7");
        assert_eq!(params[1].1, "49153");
        assert_eq!(params[4].1, "tcp");
    }

    #[test]
    fn test_missing_field_is_silently_omitted() {
        let mut event = sample_event();
        event.remove("dst_port");
        let params = build_params(&event, &session_scheme(), 5).unwrap();
        assert!(params.iter().all(|(k, _)| k != "connected_port"));
        assert!(params.iter().any(|(k, _)| k == "connected_ip"));
    }

    #[test]
    fn test_missing_timestamp_omits_both_bounds() {
        let mut event = sample_event();
        event.remove("timestamp");
        let params = build_params(&event, &session_scheme(), 5).unwrap();
        assert!(params.iter().all(|(k, _)| !k.starts_with("start_timestamp")));
    }

    #[test]
    fn test_timestamp_range_window_width_and_designator() {
        let (gte, lte) = timestamp_range("2021-01-01 00:00:00", 5).unwrap();
        assert!(gte.ends_with('Z'));
        assert!(lte.ends_with('Z'));
        let width = parse_api_time(&lte) - parse_api_time(&gte);
        assert_eq!(width, Duration::seconds(10));
    }

    #[test]
    fn test_window_bounds_shift_by_n_from_each_other() {
        let (gte_a, lte_a) = timestamp_range("2021-06-15 12:30:00", 30).unwrap();
        let (gte_b, _) = timestamp_range("2021-06-15 12:30:00", 5).unwrap();
        assert_eq!(
            parse_api_time(&gte_b) - parse_api_time(&gte_a),
            Duration::seconds(25)
        );
        assert_eq!(
            parse_api_time(&lte_a) - parse_api_time(&gte_a),
            Duration::seconds(60)
        );
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        let mut event = sample_event();
        event.insert("timestamp".into(), Value::String("yesterday".into()));
        let err = build_params(&event, &session_scheme(), 5).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_structured_values_are_skipped() {
        let mut event = sample_event();
        event.insert("src_ip".into(), serde_json::json!(["10.0.0.7", "10.0.0.8"]));
        let params = build_params(&event, &session_scheme(), 5).unwrap();
        assert!(params.iter().all(|(k, _)| k != "ip"));
    }
}
