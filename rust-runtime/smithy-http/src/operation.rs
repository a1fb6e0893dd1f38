/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::response::ParseStrictResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::Bytes;
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

impl<H> Parts<H> {
    /// Parses a loaded response with this operation's handler.
    ///
    /// Modeled and unmodeled failures reported by the handler become
    /// [`SdkError::ServiceError`]; the raw response is kept alongside either outcome.
    pub fn parse_response<O, E>(
        &self,
        raw: http::Response<Bytes>,
    ) -> Result<SdkSuccess<O>, SdkError<E>>
    where
        H: ParseStrictResponse<Output = Result<O, E>>,
    {
        let parsed = self.response_handler.parse(&raw);
        let operation = self.metadata.as_ref().map(Metadata::name).unwrap_or("unknown");
        tracing::debug!(operation = %operation, status = %raw.status(), success = parsed.is_ok(), "parsed response");
        match parsed {
            Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
            Err(err) => Err(SdkError::ServiceError { raw, err }),
        }
    }
}

/// A fully serialized request paired with the handler that knows how to parse its response.
///
/// Sending the request is left to the caller: take it apart with
/// [`into_request_response`](Operation::into_request_response), dispatch the request, then
/// hand the loaded response to [`Parts::parse_response`].
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<Bytes>,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<Bytes>, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &http::Request<Bytes> {
        &self.request
    }

    pub fn into_request_response(self) -> (http::Request<Bytes>, Parts<H>) {
        (self.request, self.parts)
    }
}

#[cfg(test)]
mod test {
    use super::{Metadata, Operation};
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use http::Response;

    struct StatusCheck;

    impl ParseStrictResponse for StatusCheck {
        type Output = Result<String, u16>;

        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).into_owned())
            } else {
                Err(response.status().as_u16())
            }
        }
    }

    fn operation() -> Operation<StatusCheck> {
        let request = http::Request::builder()
            .method("POST")
            .uri("https://example.com/")
            .body(Bytes::from_static(b"Action=Test"))
            .unwrap();
        Operation::new(request, StatusCheck).with_metadata(Metadata::new("Test", "example"))
    }

    #[test]
    fn metadata_is_attached() {
        let op = operation();
        assert_eq!(op.metadata().unwrap().name(), "Test");
        assert_eq!(op.metadata().unwrap().service(), "example");
        assert_eq!(op.request().method(), "POST");
    }

    #[test]
    fn successful_responses_are_parsed() {
        let (request, parts) = operation().into_request_response();
        assert_eq!(request.body().as_ref(), b"Action=Test");
        let success = parts
            .parse_response(Response::new(Bytes::from_static(b"ok")))
            .expect("2xx should parse");
        assert_eq!(success.parsed, "ok");
        assert_eq!(success.raw.status(), 200);
    }

    #[test]
    fn failed_responses_become_service_errors() {
        let (_, parts) = operation().into_request_response();
        let raw = Response::builder()
            .status(404)
            .body(Bytes::new())
            .unwrap();
        match parts.parse_response(raw) {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, 404);
                assert_eq!(raw.status(), 404);
            }
            other => panic!("expected a service error, got {:?}", other),
        }
    }
}
