//! Tests for domain error construction and correlation capture.

use super::*;
use rstest::rstest;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("dup"), ErrorCode::Conflict)]
#[case(Error::storage("db"), ErrorCode::StorageError)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn new_substitutes_blank_messages() {
    let error = Error::new(ErrorCode::InternalError, "");
    assert_eq!(error.message(), "Unexpected error");
}

#[rstest]
fn display_uses_message() {
    let error = Error::not_found("Ingredient with id missing not found");
    assert_eq!(error.to_string(), "Ingredient with id missing not found");
}

#[rstest]
fn correlation_id_is_none_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.correlation_id().is_none());
}

#[tokio::test]
async fn captures_correlation_id_in_scope() {
    let id = CorrelationId::parse("req-7").expect("valid id");
    let error = CorrelationId::scope(id, async { Error::conflict("dup") }).await;
    assert_eq!(error.correlation_id(), Some("req-7"));
}

#[rstest]
fn with_correlation_id_overrides_capture() {
    let error = Error::not_found("missing").with_correlation_id("abc");
    assert_eq!(error.correlation_id(), Some("abc"));
}

#[rstest]
#[case(ErrorCode::InvalidRequest, false)]
#[case(ErrorCode::NotFound, false)]
#[case(ErrorCode::Conflict, false)]
#[case(ErrorCode::StorageError, true)]
#[case(ErrorCode::InternalError, true)]
fn internal_codes_are_flagged(#[case] code: ErrorCode, #[case] expected: bool) {
    assert_eq!(code.is_internal(), expected);
}
