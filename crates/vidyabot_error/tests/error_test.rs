//! Tests for the top-level error wrapper and its conversions.

use vidyabot_error::{
    ConfigError, GeminiError, GeminiErrorKind, HttpError, ServerError, ServerErrorKind,
    VidyabotError, VidyabotErrorKind, VidyabotResult,
};

fn read_config() -> VidyabotResult<u16> {
    Err(ConfigError::new("Invalid PORT value: abc"))?
}

#[test]
fn test_question_mark_converts_domain_errors() {
    let err = read_config().unwrap_err();
    assert!(matches!(err.kind(), VidyabotErrorKind::Config(_)));
    assert!(format!("{err}").contains("Invalid PORT value"));
}

#[test]
fn test_each_domain_error_maps_to_its_kind() {
    let err: VidyabotError = HttpError::new("connection refused").into();
    assert!(matches!(err.kind(), VidyabotErrorKind::Http(_)));

    let err: VidyabotError =
        GeminiError::new(GeminiErrorKind::QuotaExhausted("quota exceeded".into())).into();
    assert!(matches!(err.kind(), VidyabotErrorKind::Gemini(_)));

    let err: VidyabotError = ServerError::new(ServerErrorKind::Bind {
        address: "0.0.0.0:3000".into(),
        message: "address in use".into(),
    })
    .into();
    assert!(matches!(err.kind(), VidyabotErrorKind::Server(_)));
}

#[test]
fn test_display_prefixes_with_domain() {
    let err: VidyabotError = HttpError::new("404 Not Found").into();
    let rendered = format!("{err}");
    assert!(rendered.starts_with("VidyaBot Error: HTTP Error"));
    assert!(rendered.contains("404 Not Found"));
}

#[test]
fn test_location_capture_points_at_caller() {
    let err = HttpError::new("timed out");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}
