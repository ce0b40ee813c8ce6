// Domain rules - Range-to-command translation and naming policy

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::domain::model::*;

/// Prefix of every generated output file
pub const OUTPUT_FILE_PREFIX: &str = "MP4_";

/// Extension of every generated output file
pub const OUTPUT_FILE_EXTENSION: &str = "mp4";

/// Timestamp layout used in generated file names (`yyyyMMdd_HHmmss`)
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const SATURATED_TIMECODE: &str = "99:59:59";
const ZERO_TIMECODE: &str = "00:00";

/// Convert a whole-second count to the transcoder's timecode.
///
/// Zero and negative values yield the two-field `00:00`. Anything past
/// 99 hours saturates to `99:59:59`.
pub fn seconds_to_timecode(seconds: i64) -> Timecode {
    if seconds <= 0 {
        return Timecode::from_string(ZERO_TIMECODE.to_string());
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        let secs = seconds % 60;
        return Timecode::from_string(format!("00:{}:{}", unit_format(minutes), unit_format(secs)));
    }

    let hours = minutes / 60;
    if hours > 99 {
        return Timecode::from_string(SATURATED_TIMECODE.to_string());
    }
    let minutes = minutes % 60;
    let secs = seconds - hours * 3600 - minutes * 60;

    Timecode::from_string(format!(
        "{}:{}:{}",
        unit_format(hours),
        unit_format(minutes),
        unit_format(secs)
    ))
}

/// Zero-pad single digits
fn unit_format(value: i64) -> String {
    if (0..10).contains(&value) {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}

/// Decode a `HH:MM:SS` or `MM:SS` timecode to whole seconds.
///
/// Fields must be unsigned; minutes and seconds must be below 60. Returns
/// `None` for anything else, including totals that overflow `i64`.
pub fn timecode_to_seconds(timecode: &str) -> Option<i64> {
    let fields = timecode
        .split(':')
        .map(|field| {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            field.parse::<i64>().ok()
        })
        .collect::<Option<Vec<_>>>()?;

    let (hours, minutes, seconds) = match fields.as_slice() {
        [minutes, seconds] => (0, *minutes, *seconds),
        [hours, minutes, seconds] => (*hours, *minutes, *seconds),
        _ => return None,
    };
    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    hours
        .checked_mul(3600)?
        .checked_add(minutes * 60)?
        .checked_add(seconds)
}

/// Build the stream-copy trim argument vector.
///
/// Start and duration are truncated to whole seconds before conversion.
pub fn build_trim_command(
    source: &Path,
    destination: &Path,
    start_ms: u64,
    end_ms: u64,
) -> TrimCommand {
    let start = seconds_to_timecode(millis_to_seconds(start_ms));
    let duration = seconds_to_timecode(millis_to_seconds(end_ms.saturating_sub(start_ms)));

    TrimCommand::new(start, duration, source, destination)
}

fn millis_to_seconds(ms: u64) -> i64 {
    i64::try_from(ms / 1000).unwrap_or(i64::MAX)
}

/// Format a millisecond duration for UI labels: `H:MM:SS` or `MM:SS`.
pub fn format_display_time(time_ms: u64) -> String {
    let total_seconds = time_ms / 1000;

    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// `MP4_<yyyyMMdd_HHmmss>.mp4` for the given instant
pub fn output_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}.{}",
        OUTPUT_FILE_PREFIX,
        now.format(OUTPUT_TIMESTAMP_FORMAT),
        OUTPUT_FILE_EXTENSION
    )
}

/// Generated output path inside `destination_dir`
pub fn destination_path<Tz>(destination_dir: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    destination_dir.join(output_file_name(now))
}

#[cfg(test)]
mod tests;
