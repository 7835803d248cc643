//! Centralized display formatting utilities.
//!
//! All numeric display formatting goes through this module to ensure
//! consistency between the overlay renderer and any host-side UI that
//! echoes the same values.

/// Length of one game tick in milliseconds.
///
/// The game simulation advances on a fixed 0.6 second cadence; durations
/// and tick-based rates are converted through this constant.
pub const TICK_MILLIS: u64 = 600;

/// Format a duration in seconds as `M:SS`.
///
/// # Examples
/// ```
/// use splatlog_types::formatting::format_seconds;
/// assert_eq!(format_seconds(0), "0:00");
/// assert_eq!(format_seconds(59), "0:59");
/// assert_eq!(format_seconds(125), "2:05");
/// ```
pub fn format_seconds(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format a duration measured in game ticks as `M:SS`.
///
/// Whole seconds are computed in integer milliseconds to avoid float
/// drift on long fights.
///
/// # Examples
/// ```
/// use splatlog_types::formatting::format_tick_duration;
/// assert_eq!(format_tick_duration(0), "0:00");
/// assert_eq!(format_tick_duration(100), "1:00");
/// assert_eq!(format_tick_duration(250), "2:30");
/// ```
pub fn format_tick_duration(ticks: u32) -> String {
    format_seconds(u64::from(ticks) * TICK_MILLIS / 1000)
}

/// Format a DPS value with two decimal places.
///
/// # Examples
/// ```
/// use splatlog_types::formatting::format_dps;
/// assert_eq!(format_dps(12.5), "12.50");
/// assert_eq!(format_dps(0.0), "0.00");
/// ```
pub fn format_dps(dps: f32) -> String {
    format!("{:.2}", dps)
}

/// Format a percentage with one decimal place and a trailing `%`.
///
/// # Examples
/// ```
/// use splatlog_types::formatting::format_percent;
/// assert_eq!(format_percent(66.66), "66.7%");
/// assert_eq!(format_percent(0.0), "0.0%");
/// ```
pub fn format_percent(pct: f32) -> String {
    format!("{:.1}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "0:00");
        assert_eq!(format_seconds(60), "1:00");
        assert_eq!(format_seconds(61), "1:01");
        assert_eq!(format_seconds(3599), "59:59");
    }

    #[test]
    fn test_format_tick_duration() {
        // 0.6s per tick
        assert_eq!(format_tick_duration(1), "0:00");
        assert_eq!(format_tick_duration(2), "0:01");
        assert_eq!(format_tick_duration(10), "0:06");
        assert_eq!(format_tick_duration(1000), "10:00");
    }

    #[test]
    fn test_format_dps() {
        assert_eq!(format_dps(123.456), "123.46");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(33.33), "33.3%");
    }
}
