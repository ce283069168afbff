//! Formatting helpers.

use std::time::Duration;

/// Format a duration as `H:MM`.
pub fn format_hmm(d: Duration) -> String {
    let mins = d.as_secs() / 60;
    format!("{}:{:02}", mins / 60, mins % 60)
}

/// Format a duration as a rough human string.
pub fn approx_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 3600 {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        return format!("≈{hours}h{minutes}m");
    }
    if secs >= 600 {
        // >= 10m, round to 5m
        let minutes = ((secs + 150) / 300) * 5;
        return format!("≈{minutes}m");
    }
    if secs >= 120 {
        let minutes = (secs + 30) / 60;
        return format!("≈{minutes}m");
    }
    if secs >= 60 {
        return "≈1m".to_string();
    }
    // < 60s, round to 10s
    let rounded = ((secs + 5) / 10) * 10;
    format!("≈{}s", rounded.max(10))
}
