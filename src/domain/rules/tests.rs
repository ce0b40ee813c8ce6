// Unit tests for translation rules

use super::*;
use chrono::Utc;
use std::path::Path;

#[test]
fn test_timecode_zero_and_negative_use_two_fields() {
    assert_eq!(seconds_to_timecode(0).as_str(), "00:00");
    assert_eq!(seconds_to_timecode(-1).as_str(), "00:00");
    assert_eq!(seconds_to_timecode(i64::MIN).as_str(), "00:00");
}

#[test]
fn test_timecode_under_an_hour() {
    assert_eq!(seconds_to_timecode(1).as_str(), "00:00:01");
    assert_eq!(seconds_to_timecode(20).as_str(), "00:00:20");
    assert_eq!(seconds_to_timecode(61).as_str(), "00:01:01");
    assert_eq!(seconds_to_timecode(600).as_str(), "00:10:00");
    assert_eq!(seconds_to_timecode(3599).as_str(), "00:59:59");
}

#[test]
fn test_timecode_with_hours() {
    assert_eq!(seconds_to_timecode(3600).as_str(), "01:00:00");
    assert_eq!(seconds_to_timecode(3661).as_str(), "01:01:01");
    assert_eq!(seconds_to_timecode(36_000 + 59 * 60 + 9).as_str(), "10:59:09");
    assert_eq!(seconds_to_timecode(99 * 3600 + 59 * 60 + 59).as_str(), "99:59:59");
}

#[test]
fn test_timecode_saturates_past_99_hours() {
    assert_eq!(seconds_to_timecode(100 * 3600).as_str(), "99:59:59");
    assert_eq!(seconds_to_timecode(100 * 3600 + 1).as_str(), "99:59:59");
    assert_eq!(seconds_to_timecode(i64::MAX).as_str(), "99:59:59");
}

#[test]
fn test_timecode_fields_reconstruct_total() {
    for total in [3600_i64, 3601, 7199, 45_296, 86_399, 359_999] {
        let timecode = seconds_to_timecode(total);
        let fields: Vec<i64> = timecode
            .as_str()
            .split(':')
            .map(|f| f.parse().unwrap())
            .collect();
        assert_eq!(fields.len(), 3, "{}", timecode);
        assert!(fields[1] < 60 && fields[2] < 60);
        assert_eq!(fields[0] * 3600 + fields[1] * 60 + fields[2], total);
    }
}

#[test]
fn test_timecode_to_seconds() {
    assert_eq!(timecode_to_seconds("00:00"), Some(0));
    assert_eq!(timecode_to_seconds("00:00:20"), Some(20));
    assert_eq!(timecode_to_seconds("01:01:01"), Some(3661));
    assert_eq!(timecode_to_seconds("garbage"), None);
    assert_eq!(timecode_to_seconds("1:2:3:4"), None);
    assert_eq!(timecode_to_seconds("99:59:59"), Some(359_999));
    assert_eq!(timecode_to_seconds("120:00:00"), Some(432_000));
}

#[test]
fn test_timecode_to_seconds_rejects_malformed_fields() {
    // Negative or signed fields
    assert_eq!(timecode_to_seconds("-1:-5"), None);
    assert_eq!(timecode_to_seconds("00:-01:00"), None);
    assert_eq!(timecode_to_seconds("+1:00"), None);

    // Minutes and seconds stay below 60
    assert_eq!(timecode_to_seconds("00:60"), None);
    assert_eq!(timecode_to_seconds("00:61:00"), None);
    assert_eq!(timecode_to_seconds("00:00:75"), None);

    // Empty fields
    assert_eq!(timecode_to_seconds(":"), None);
    assert_eq!(timecode_to_seconds("01::00"), None);
}

#[test]
fn test_timecode_to_seconds_overflow_is_none() {
    assert_eq!(timecode_to_seconds("9999999999999999:00:00"), None);
    assert_eq!(timecode_to_seconds("99999999999999999999:00:00"), None);
    assert_eq!(
        timecode_to_seconds(&format!("{}:59:59", i64::MAX / 3600)),
        None
    );
}

#[test]
fn test_build_trim_command_layout() {
    let command = build_trim_command(
        Path::new("/videos/in.mp4"),
        Path::new("/out/MP4_20240101_000000.mp4"),
        20_000,
        30_000,
    );

    assert_eq!(
        command.args(),
        &[
            "-ss",
            "00:00:20",
            "-i",
            "/videos/in.mp4",
            "-t",
            "00:00:10",
            "-c",
            "copy",
            "/out/MP4_20240101_000000.mp4",
        ]
    );
    assert_eq!(command.start().as_str(), "00:00:20");
    assert_eq!(command.duration().as_str(), "00:00:10");
    assert_eq!(command.source(), "/videos/in.mp4");
    assert_eq!(command.destination(), "/out/MP4_20240101_000000.mp4");
}

#[test]
fn test_build_trim_command_is_deterministic() {
    let src = Path::new("a.mp4");
    let dst = Path::new("b.mp4");
    assert_eq!(
        build_trim_command(src, dst, 1_234, 98_765),
        build_trim_command(src, dst, 1_234, 98_765)
    );
}

#[test]
fn test_build_trim_command_sub_second_duration() {
    let command = build_trim_command(Path::new("a.mp4"), Path::new("b.mp4"), 0, 500);
    assert_eq!(command.start().as_str(), "00:00");
    assert_eq!(command.duration().as_str(), "00:00");
}

#[test]
fn test_build_trim_command_saturated_duration() {
    let end_ms = (100 * 3600 + 1) * 1000;
    let command = build_trim_command(Path::new("a.mp4"), Path::new("b.mp4"), 0, end_ms);
    assert_eq!(command.duration().as_str(), "99:59:59");
}

#[test]
fn test_build_trim_command_truncates_to_whole_seconds() {
    let command = build_trim_command(Path::new("a.mp4"), Path::new("b.mp4"), 1_999, 4_998);
    assert_eq!(command.start().as_str(), "00:00:01");
    assert_eq!(command.duration().as_str(), "00:00:02");
}

#[test]
fn test_duration_round_trip() {
    let cases = [(0_u64, 1_000_u64), (5_500, 7_000), (0, 3_600_000), (12_345, 4_000_000), (0, 359_999_000)];
    for (start_ms, end_ms) in cases {
        let command = build_trim_command(Path::new("a"), Path::new("b"), start_ms, end_ms);
        let expected = ((end_ms - start_ms) / 1000) as i64;
        assert_eq!(command.duration().to_seconds(), Some(expected));
    }
}

#[test]
fn test_format_display_time() {
    assert_eq!(format_display_time(3_661_000), "1:01:01");
    assert_eq!(format_display_time(61_000), "01:01");
    assert_eq!(format_display_time(0), "00:00");
    assert_eq!(format_display_time(999), "00:00");
    assert_eq!(format_display_time(36_000_000), "10:00:00");
}

#[test]
fn test_output_file_name() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
    assert_eq!(output_file_name(&now), "MP4_20240305_070809.mp4");
}

#[test]
fn test_destination_path_joins_directory() {
    let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
    let path = destination_path(Path::new("/tmp/trims"), &now);
    assert_eq!(path, Path::new("/tmp/trims/MP4_20231231_235958.mp4"));
}
