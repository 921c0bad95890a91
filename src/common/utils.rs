use aws_sdk_dynamodb::error::DisplayErrorContext;
use lambda_http::http::StatusCode;
use lambda_http::{Error as LambdaError, Request, RequestExt, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::common::errors::Error;
use crate::common::ID_ATTRIBUTE;

pub const MISSING_BODY_ERROR: &str = "Missing request body";
pub const MISSING_ID_ERROR: &str = "Missing path parameter \"id\"";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Serialize)]
struct Message<'a> {
    message: &'a str,
}

pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(serde_json::to_string(body)?)?;

    Ok(response)
}

pub fn message_response(status: StatusCode, message: &str) -> Result<Response<String>, Error> {
    json_response(status, &Message { message })
}

/// Short-circuits a handler with a `{"message": ...}` response.
pub fn reject<T>(status: StatusCode, message: &str) -> Result<T, Error> {
    Err(Error::HttpError(message_response(status, message)?))
}

/// The `id` path parameter, treating an empty segment as absent.
pub fn extract_id(request: &Request) -> Result<String, Error> {
    match request.path_parameters().first(ID_ATTRIBUTE) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => reject(StatusCode::BAD_REQUEST, MISSING_ID_ERROR),
    }
}

/// Parses the body as JSON. A body that isn't JSON, or is a bare `null`
/// with no fields to read, is an operational error, not a validation one.
pub fn extract_body(request: &Request) -> Result<Value, Error> {
    let body = request.body().as_ref();
    if body.is_empty() {
        return reject(StatusCode::BAD_REQUEST, MISSING_BODY_ERROR);
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Null => Err(Error::NullBody),
        value => Ok(value),
    }
}

/// A non-empty string field of the body, if there is one.
pub fn string_field(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Outer boundary of every handler: early responses go back as they are,
/// anything else is logged and hidden behind a generic 500.
pub fn into_response(
    operation: &str,
    result: Result<Response<String>, Error>,
) -> Result<Response<String>, LambdaError> {
    match result {
        Ok(val) => Ok(val),
        Err(Error::HttpError(val)) => Ok(val),
        Err(err) => {
            error!(error = %DisplayErrorContext(&err), "Error {}", operation);
            Ok(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_SERVER_ERROR,
            )?)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::common::errors::StorageError;
    use serde_json::json;

    #[test]
    fn extracts_id_from_path() {
        assert_eq!(extract_id(&request(None, Some("123"))).unwrap(), "123");
    }

    #[test]
    fn missing_or_empty_id_is_rejected() {
        for req in [request(None, None), request(None, Some(""))] {
            match extract_id(&req) {
                Err(Error::HttpError(response)) => {
                    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
                    assert_eq!(message(&response), MISSING_ID_ERROR);
                }
                other => panic!("expected rejection, got {:?}", other),
            }
        }
    }

    #[test]
    fn empty_body_is_rejected() {
        for req in [request(None, None), request(Some(""), None)] {
            match extract_body(&req) {
                Err(Error::HttpError(response)) => {
                    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
                    assert_eq!(message(&response), MISSING_BODY_ERROR);
                }
                other => panic!("expected rejection, got {:?}", other),
            }
        }
    }

    #[test]
    fn malformed_body_is_operational() {
        let err = extract_body(&request(Some("{not json"), None)).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn null_body_is_operational() {
        let err = extract_body(&request(Some("null"), None)).unwrap_err();
        assert!(matches!(err, Error::NullBody));
    }

    #[test]
    fn string_field_skips_empty_and_non_strings() {
        let body = json!({"id": "", "name": 7, "other": "ok"});

        assert_eq!(string_field(&body, "id"), None);
        assert_eq!(string_field(&body, "name"), None);
        assert_eq!(string_field(&body, "missing"), None);
        assert_eq!(string_field(&body, "other").as_deref(), Some("ok"));
        assert_eq!(string_field(&json!("scalar"), "id"), None);
    }

    #[test]
    fn operational_errors_become_generic_500() {
        let err = Error::Storage(StorageError::Sdk {
            operation: "put_item",
            cause: "secret table details".into(),
        });

        let response = into_response("creating item", Err(err)).unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(&response), json!({"message": INTERNAL_SERVER_ERROR}));
        assert!(!response.body().contains("secret"));
    }
}
