use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::NotFound("tab-x".into()), 404, "NOT_FOUND")]
#[case(AppError::Validation("bad".into()), 400, "VALIDATION_ERROR")]
#[case(AppError::Schema("missing column".into()), 422, "SCHEMA_MISMATCH")]
#[case(AppError::Internal("oops".into()), 500, "INTERNAL_ERROR")]
fn test_app_error_status_and_code(
    #[case] error: AppError,
    #[case] status: u16,
    #[case] code: &str,
) {
    assert_eq!(error.status_code(), status);
    assert_eq!(error.error_code(), code);
}

#[test]
fn test_error_display() {
    assert_eq!(
        AppError::NotFound("msg".into()).to_string(),
        "Not found: msg"
    );
    assert_eq!(
        AppError::Validation("msg".into()).to_string(),
        "Validation error: msg"
    );
    assert_eq!(
        AppError::Schema("msg".into()).to_string(),
        "Schema mismatch: msg"
    );
    assert_eq!(
        AppError::Internal("msg".into()).to_string(),
        "Internal error: msg"
    );
}

#[test]
fn test_client_errors_are_exposed() {
    assert!(AppError::Validation(String::new()).is_client_error());
    assert!(AppError::Schema(String::new()).is_client_error());
    assert!(!AppError::Internal(String::new()).is_client_error());
}
