//! Human-readable duration strings.

use chrono::TimeDelta;

/// Formats a duration as `{H}h{MM}m{SS}s`, e.g. `27h03m09s`.
///
/// Hours are not wrapped into days. Negative durations format as zero.
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}h{minutes:02}m{seconds:02}s")
}
