use std::time::Duration;

/// Format elapsed wall-clock time as `m:ss` with zero-padded seconds.
pub fn minutes_seconds(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}
