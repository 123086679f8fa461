// src/utils/format.rs
use chrono::{DateTime, Utc};

// Format a timestamp as a relative duration for display
pub fn format_time_ago(time: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(time);
    let seconds = duration.num_seconds();

    if seconds < 60 {
        format!("{} seconds ago", seconds.max(0))
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else {
        format!("{} days ago", duration.num_days())
    }
}

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[0..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn recent_timestamps_render_in_seconds() {
        let rendered = format_time_ago(Utc::now());
        assert!(rendered.ends_with("seconds ago"));
    }

    #[test]
    fn older_timestamps_scale_units() {
        let rendered = format_time_ago(Utc::now() - Duration::minutes(5));
        assert_eq!(rendered, "5 minutes ago");
    }

    #[test]
    fn truncation_keeps_short_strings_intact() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("0123456789", 8), "01234...");
    }
}
