//! The fixed four-scenario investigation driver.
//!
//! Scenarios run strictly in sequence, each with its own query. A header
//! line precedes every section; an empty result set prints nothing after
//! the header.

use swclookup_core::{event, format, params, types};
use swclookup_core::{Alert, ParamSource, Result, Session, SwcClient, SwcConfig};

/// Half-width of the exact-match window, in seconds.
const EXACT_WINDOW_SECS: i64 = 5;

/// Half-width of the nearby-session windows, in seconds.
const NEARBY_WINDOW_SECS: i64 = 30;

/// Half-width of the alert window: seven days.
const ALERT_WINDOW_SECS: i64 = 3600 * 24 * 7;

/// How many top talkers to keep.
const TOP_TALKERS: usize = 5;

/// Run the whole investigation for the configured event.
pub async fn run(config: &SwcConfig) -> Result<()> {
    let event = event::load_event(&config.event_path)?;
    let client = SwcClient::new(config.clone())?;

    println!("\nEvent matching session(s):");
    let scheme = [
        ("ip", ParamSource::Field("src_ip")),
        ("port", ParamSource::Field("src_port")),
        ("connected_ip", ParamSource::Field("dst_ip")),
        ("connected_port", ParamSource::Field("dst_port")),
        ("protocol", ParamSource::Field("proto")),
        ("start_timestamp_utc__gte", ParamSource::TimestampGte),
        ("start_timestamp_utc__lte", ParamSource::TimestampLte),
    ];
    let query = params::build_params(&event, &scheme, EXACT_WINDOW_SECS)?;
    let sessions: Vec<Session> = client.query_objects(client.session_url(), &query).await?;
    print_sessions(&sessions);

    println!("\nOther session(s) matching the source and destination IP addresses (event time +/- 30secs):");
    let scheme = [
        ("ip", ParamSource::Field("src_ip")),
        ("connected_ip", ParamSource::Field("dst_ip")),
        ("start_timestamp_utc__gte", ParamSource::TimestampGte),
        ("start_timestamp_utc__lte", ParamSource::TimestampLte),
    ];
    let query = params::build_params(&event, &scheme, NEARBY_WINDOW_SECS)?;
    let mut sessions: Vec<Session> = client.query_objects(client.session_url(), &query).await?;
    types::sort_by_total_octets_desc(&mut sessions);
    print_sessions(&sessions);

    println!("\nTop talkers matching the source IP address (event time +/- 30secs; displaying top 5):");
    let scheme = [
        ("ip", ParamSource::Field("src_ip")),
        ("start_timestamp_utc__gte", ParamSource::TimestampGte),
        ("start_timestamp_utc__lte", ParamSource::TimestampLte),
    ];
    let query = params::build_params(&event, &scheme, NEARBY_WINDOW_SECS)?;
    let sessions: Vec<Session> = client.query_objects(client.session_url(), &query).await?;
    let sessions = types::top_talkers(sessions, TOP_TALKERS);
    print_sessions(&sessions);

    println!("\nAlert(s) (event time +/- 7 days):");
    let scheme = [
        ("time__gte", ParamSource::TimestampGte),
        ("time__lte", ParamSource::TimestampLte),
    ];
    let mut query = params::build_params(&event, &scheme, ALERT_WINDOW_SECS)?;
    query.push(("status".to_string(), "all".to_string()));
    let alerts: Vec<Alert> = client.query_objects(client.alert_url(), &query).await?;
    for alert in &alerts {
        println!("{}", format::alert_json(alert)?);
    }

    Ok(())
}

fn print_sessions(sessions: &[Session]) {
    for session in sessions {
        println!("{}", format::session_line(session));
    }
}
