/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::header::ToStrError;
use http::Response;
use serde_json::Value;

fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn error_type_from_header(response: &Response<Bytes>) -> Result<Option<&str>, ToStrError> {
    response
        .headers()
        .get("X-Amzn-Errortype")
        .map(|v| v.to_str())
        .transpose()
}

fn error_type_from_body(body: &Value) -> Option<&str> {
    body.get("code")
        .or_else(|| body.get("__type"))
        .and_then(Value::as_str)
}

fn request_id(response: &Response<Bytes>) -> Option<&str> {
    response
        .headers()
        .get("X-Amzn-Requestid")
        .and_then(|v| v.to_str().ok())
}

/// Extracts the code, message and request ID of a restJson1 error response.
///
/// An empty body is read as `{}`. A body that is not JSON is an error.
pub fn parse_generic_error(
    response: &Response<Bytes>,
) -> Result<smithy_types::Error, serde_json::Error> {
    let body: Value = if response.body().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(response.body())?
    };
    let header_code = error_type_from_header(response).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "ignoring X-Amzn-Errortype header that is not valid UTF-8");
        None
    });
    let code = header_code
        .or_else(|| error_type_from_body(&body))
        .map(sanitize_error_code);
    let message = body
        .get("message")
        .or_else(|| body.get("Message"))
        .and_then(Value::as_str);
    let mut err_builder = smithy_types::Error::builder();
    if let Some(code) = code {
        err_builder = err_builder.code(code);
    }
    if let Some(message) = message {
        err_builder = err_builder.message(message);
    }
    if let Some(request_id) = request_id(response) {
        err_builder = err_builder.request_id(request_id);
    }
    Ok(err_builder.build())
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use http::Response;

    #[test]
    fn generic_error() {
        let response = Response::builder()
            .header("X-Amzn-Requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            smithy_types::Error::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn error_type() {
        let response = Response::builder()
            .header(
                "X-Amzn-Errortype",
                "ValidationException:http://internal.amazon.com/coral/com.amazonaws.elastictranscoder/",
            )
            .body(Bytes::from_static(br#"{"Message": "Bad page token"}"#))
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), Some("ValidationException"));
        assert_eq!(err.message(), Some("Bad page token"));
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn header_wins_over_body() {
        let response = Response::builder()
            .header("x-amzn-errortype", "AccessDeniedException")
            .body(Bytes::from_static(br#"{"code": "SomethingElse"}"#))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap().code(),
            Some("AccessDeniedException")
        );
    }

    #[test]
    fn empty_body() {
        let response = Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            smithy_types::Error::builder().build()
        );
    }

    #[test]
    fn html_body_is_an_error() {
        let response = Response::builder()
            .status(502)
            .body(Bytes::from_static(b"<html>Bad Gateway</html>"))
            .unwrap();
        assert!(parse_generic_error(&response).is_err());
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(sanitize_error_code("FooError:http://internal.amazon.com/coral/"), "FooError");
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
