//! Human-readable durations and seekbar percent
//!
//! The now-playing widget displays positions and durations as `M:SS`, with
//! minutes left unbounded (an hour is `60:00`, not `1:00:00`).

/// Format whole seconds as `M:SS`.
///
/// # Examples
///
/// ```
/// use amuse_common::human_time::to_human;
///
/// assert_eq!(to_human(65), "1:05");
/// assert_eq!(to_human(0), "0:00");
/// assert_eq!(to_human(3600), "60:00");
/// ```
pub fn to_human(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Fraction of the track already played.
///
/// Unguarded: a zero `total` yields `NaN` or infinity, which callers pass
/// through unchanged (it serializes as `null`, see [`crate::wire`]).
pub fn percent(position: f64, total: f64) -> f64 {
    position / total
}

/// Truncate a provider-supplied second count to whole seconds.
///
/// Negative and non-finite inputs clamp to zero.
pub fn whole_seconds(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_human_pads_seconds() {
        assert_eq!(to_human(65), "1:05");
        assert_eq!(to_human(130), "2:10");
        assert_eq!(to_human(9), "0:09");
        assert_eq!(to_human(59), "0:59");
        assert_eq!(to_human(60), "1:00");
    }

    #[test]
    fn test_to_human_zero_and_hours() {
        assert_eq!(to_human(0), "0:00");
        // Minutes never roll over into hours
        assert_eq!(to_human(3600), "60:00");
        assert_eq!(to_human(7325), "122:05");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(65.0, 130.0), 0.5);
        assert_eq!(percent(0.0, 200.0), 0.0);
        assert_eq!(percent(200.0, 200.0), 1.0);
    }

    #[test]
    fn test_percent_zero_total_is_not_finite() {
        assert!(!percent(10.0, 0.0).is_finite());
        assert!(percent(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_whole_seconds() {
        assert_eq!(whole_seconds(65.0), 65);
        assert_eq!(whole_seconds(65.9), 65);
        assert_eq!(whole_seconds(0.0), 0);
        assert_eq!(whole_seconds(-3.0), 0);
        assert_eq!(whole_seconds(f64::NAN), 0);
        assert_eq!(whole_seconds(f64::INFINITY), 0);
    }
}
