//! Presenters for query results.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::types::{Alert, Session};

/// Render one session as a single summary line.
///
/// The start time drops the trailing zone designator and replaces `T`
/// with a space so the line reads like a log entry.
pub fn session_line(session: &Session) -> String {
    let start = session
        .start_timestamp_utc
        .strip_suffix('Z')
        .unwrap_or(&session.start_timestamp_utc)
        .replace('T', " ");
    format!(
        "Time: {start}, Src: {}:{}, Dst: {}:{}, Proto: {}, Data In: {}, Data Out: {}, Packets In: {}, Packets Out: {}",
        session.ip,
        session.port,
        session.connected_ip,
        session.connected_port,
        session.protocol,
        session.octets_in,
        session.octets_out,
        session.packets_in,
        session.packets_out,
    )
}

/// Render an alert as pretty-printed JSON with four-space indentation.
///
/// `serde_json`'s map is ordered, so keys come out sorted.
pub fn alert_json(alert: &Alert) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    alert.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        serde_json::from_str(
            r#"{
                "start_timestamp_utc": "2021-01-01T00:00:03Z",
                "ip": "10.0.0.7",
                "port": 49153,
                "connected_ip": "192.0.2.44",
                "connected_port": 443,
                "protocol": "tcp",
                "octets_in": 1024,
                "octets_out": 2048,
                "packets_in": 4,
                "packets_out": 6
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_session_line_format() {
        let line = session_line(&sample_session());
        assert_eq!(
            line,
            "Time: 2021-01-01 00:00:03, Src: 10.0.0.7:49153, Dst: 192.0.2.44:443, \
             Proto: tcp, Data In: 1024, Data Out: 2048, Packets In: 4, Packets Out: 6"
        );
    }

    #[test]
    fn test_session_line_without_designator_is_untouched() {
        let mut session = sample_session();
        session.start_timestamp_utc = "2021-01-01T00:00:03".into();
        let line = session_line(&session);
        assert!(line.starts_with("Time: 2021-01-01 00:00:03,"));
    }

    #[test]
    fn test_alert_json_sorts_keys_and_indents_four() {
        let alert: Alert =
            serde_json::from_str(r#"{"zeta": 1, "alpha": {"inner": true}}"#).unwrap();
        let rendered = alert_json(&alert).unwrap();
        let alpha = rendered.find("\"alpha\"").unwrap();
        let zeta = rendered.find("\"zeta\"").unwrap();
        assert!(alpha < zeta);
        assert!(rendered.contains("\n    \"alpha\""));
        assert!(rendered.contains("\n        \"inner\": true"));
    }
}
