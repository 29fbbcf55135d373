//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

async fn response_body(error: &DomainError) -> Value {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
fn status_code_matches_error_code() {
    let cases = [
        (DomainError::invalid_request("bad"), StatusCode::BAD_REQUEST),
        (DomainError::not_found("missing"), StatusCode::NOT_FOUND),
        (
            DomainError::service_unavailable("down"),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
        (DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (err, status) in cases {
        assert_eq!(ResponseError::status_code(&err), status);
    }
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let body = response_body(&DomainError::internal("relation users does not exist")).await;
    assert_eq!(
        body,
        json!({ "errorCode": "internal_error", "errorDesc": "Internal server error" })
    );
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_their_description() {
    let body = response_body(&DomainError::invalid_request("bad field")).await;
    assert_eq!(
        body,
        json!({ "errorCode": "invalid_request", "errorDesc": "bad field" })
    );
}

#[rstest]
#[case(UserRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserRepositoryError::query("syntax"), ErrorCode::InternalError)]
fn repository_errors_map_to_codes(#[case] err: UserRepositoryError, #[case] code: ErrorCode) {
    assert_eq!(map_user_repository_error(err).code(), code);
}

#[rstest]
fn repository_details_stay_out_of_the_payload() {
    let mapped = map_user_repository_error(UserRepositoryError::connection("password=hunter2"));
    assert!(!mapped.description().contains("hunter2"));
}

#[rstest]
#[actix_web::test]
async fn json_errors_render_invalid_request_payload() {
    let request = actix_web::test::TestRequest::default().to_http_request();

    let error = json_error_handler(JsonPayloadError::ContentType, &request);
    let response = error.error_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body: Value = serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds");
    assert_eq!(
        body.get("errorCode").and_then(Value::as_str),
        Some("invalid_request")
    );
}
