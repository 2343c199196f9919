use chrono::{DateTime, Duration, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Adds a std duration to an instant, saturating instead of overflowing.
pub fn add_std(at: DateTime<Utc>, ttl: std::time::Duration) -> DateTime<Utc> {
    let ttl = Duration::from_std(ttl).unwrap_or(Duration::MAX);
    at.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC)
}
