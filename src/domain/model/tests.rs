// Unit tests for domain models

use super::*;
use crate::domain::rules::build_trim_command;

#[test]
fn test_trim_request_validated_accepts_range() {
    let request = TrimRequest::validated("in.mp4", "out", 1_000, 2_500).unwrap();
    assert_eq!(request.duration_ms(), 1_500);
    assert_eq!(request.source_path, PathBuf::from("in.mp4"));
}

#[test]
fn test_trim_request_validated_rejects_inverted_range() {
    let err = TrimRequest::validated("in.mp4", "out", 5_000, 5_000).unwrap_err();
    assert!(matches!(err, DomainError::BadArgs(_)));

    let err = TrimRequest::validated("in.mp4", "out", 6_000, 5_000).unwrap_err();
    assert!(matches!(err, DomainError::BadArgs(_)));
}

#[test]
fn test_trim_request_validated_rejects_empty_paths() {
    assert!(TrimRequest::validated("", "out", 0, 1_000).is_err());
    assert!(TrimRequest::validated("in.mp4", "", 0, 1_000).is_err());
}

#[test]
fn test_trim_request_new_does_not_validate() {
    let request = TrimRequest::new("in.mp4", "out", 9_000, 1_000);
    assert_eq!(request.duration_ms(), 0);
}

#[test]
fn test_trim_command_display_joins_args() {
    let command = build_trim_command(Path::new("in.mp4"), Path::new("out.mp4"), 0, 61_000);
    assert_eq!(command.to_string(), "-ss 00:00 -i in.mp4 -t 00:01:01 -c copy out.mp4");
    assert_eq!(command.clone().into_args().len(), 9);
}

#[test]
fn test_output_file_uri() {
    let output = OutputFile::new("/sdcard/Movies/MP4_20240101_101010.mp4");
    assert_eq!(output.to_uri(), "file:///sdcard/Movies/MP4_20240101_101010.mp4");

    let windows = OutputFile::new("C:\\clips\\a.mp4");
    assert_eq!(windows.to_uri(), "file:///C:/clips/a.mp4");
}

#[test]
fn test_trim_event_terminal() {
    assert!(!TrimEvent::Started.is_terminal());
    assert!(TrimEvent::Failed("boom".to_string()).is_terminal());
    assert!(TrimEvent::Succeeded(OutputFile::new("a.mp4")).is_terminal());
}

#[test]
fn test_trim_outcome_serializes_with_status_tag() {
    let outcome = TrimOutcome::Succeeded {
        output: OutputFile::new("/out/a.mp4"),
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "succeeded");
    assert_eq!(json["output"]["path"], "/out/a.mp4");

    let failed = TrimOutcome::Failed {
        message: "Invalid data".to_string(),
    };
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["message"], "Invalid data");
    assert!(!failed.is_success());
}

#[test]
fn test_trim_state_terminal() {
    assert!(!TrimState::Submitted.is_terminal());
    assert!(!TrimState::Running.is_terminal());
    assert!(TrimState::Succeeded.is_terminal());
    assert!(TrimState::Failed.is_terminal());
}
