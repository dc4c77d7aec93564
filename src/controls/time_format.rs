// SPDX-License-Identifier: MPL-2.0
//! Time display formatting.

/// Formats seconds as `HH:MM:SS`.
///
/// Unknown values (NaN, infinite) and negatives render as `00:00:00`.
///
/// # Examples
///
/// ```
/// use vidskin::controls::time_format::format_time;
///
/// assert_eq!(format_time(3665.0), "01:01:05");
/// assert_eq!(format_time(f64::NAN), "00:00:00");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Formats the `current / duration` pair; an unknown duration shows as zero.
#[must_use]
pub fn format_time_display(current: f64, duration: Option<f64>) -> String {
    format!(
        "{} / {}",
        format_time(current),
        format_time(duration.unwrap_or(0.0))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00:00");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "00:02:05");
    }

    #[test]
    fn format_time_truncates_fractions() {
        assert_eq!(format_time(59.99), "00:00:59");
    }

    #[test]
    fn format_time_handles_negative_and_unknown() {
        assert_eq!(format_time(-10.0), "00:00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00:00");
    }

    #[test]
    fn display_pairs_current_and_duration() {
        assert_eq!(format_time_display(30.0, Some(120.0)), "00:00:30 / 00:02:00");
        assert_eq!(format_time_display(30.0, None), "00:00:30 / 00:00:00");
    }
}
