use chrono::{DateTime, TimeZone, Utc};

/// Deterministic instant `seconds` after a fixed epoch.
pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_760_000_000 + seconds, 0)
        .single()
        .expect("valid timestamp")
}
