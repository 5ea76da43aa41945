//! Remote record types.

use std::cmp::Reverse;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A recorded network flow between two endpoints, as returned by the
/// session-data snapshot endpoint.
///
/// The service has been observed returning counters both as JSON numbers
/// and as numeric strings, so the numeric fields accept either.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub start_timestamp_utc: String,
    pub ip: String,
    #[serde(deserialize_with = "number_or_string")]
    pub port: u64,
    pub connected_ip: String,
    #[serde(deserialize_with = "number_or_string")]
    pub connected_port: u64,
    pub protocol: String,
    #[serde(deserialize_with = "number_or_string")]
    pub octets_in: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub octets_out: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub packets_in: u64,
    #[serde(deserialize_with = "number_or_string")]
    pub packets_out: u64,
}

impl Session {
    /// Total bytes moved in both directions.
    pub fn total_octets(&self) -> u64 {
        self.octets_in + self.octets_out
    }
}

/// A security detection record. Opaque; printed verbatim.
pub type Alert = Value;

/// Sort sessions descending by total bytes. The sort is stable, so ties
/// keep the service's order.
pub fn sort_by_total_octets_desc(sessions: &mut [Session]) {
    sessions.sort_by_key(|s| Reverse(s.total_octets()));
}

/// Keep only the `n` sessions that moved the most bytes.
pub fn top_talkers(mut sessions: Vec<Session>, n: usize) -> Vec<Session> {
    sort_by_total_octets_desc(&mut sessions);
    sessions.truncate(n);
    sessions
}

/// Accept a `u64` either as a JSON number or as a numeric string.
fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("expected unsigned integer, got {n}"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("expected numeric string: {e}"))),
        other => Err(D::Error::custom(format!(
            "expected number or numeric string, got {other}"
        ))),
    }
}
