//! Wall-clock duration rendering for the end-of-run report.

use std::time::Duration;

/// Renders an elapsed duration in a human-readable form.
///
/// Durations of an hour or more render as `HH:MM:SS`; shorter ones spell out
/// minutes and seconds with correct singular/plural wording.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else if minutes > 0 {
        format!(
            "{} {} {} {}",
            minutes,
            plural(minutes, "minute"),
            seconds,
            plural(seconds, "second")
        )
    } else {
        format!("{} {}", seconds, plural(seconds, "second"))
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}
