/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic errors for Smithy codegen

use std::borrow::Cow;
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Trait to retrieve error metadata from an operation error
pub trait ErrorMetadata {
    /// Returns error metadata, which includes the error code, message and request ID.
    fn meta(&self) -> &Error;

    /// Returns the error code if it's available.
    fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    /// Returns the error message, if there is one.
    fn message(&self) -> Option<&str> {
        self.meta().message()
    }

    /// Returns the request ID the service assigned to the failed request.
    fn request_id(&self) -> Option<&str> {
        self.meta().request_id()
    }
}

/// Generic Error type
///
/// Modeled errors still carry this metadata; unmodeled errors are returned as-is so that
/// callers can inspect `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`Error`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> Error {
        self.inner
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[derive(Debug)]
enum BuildErrorKind {
    /// A required field was missing
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    /// A field was set to a value the service will never accept
    InvalidField {
        field: &'static str,
        details: Cow<'static, str>,
    },
    /// The serializer could not serialize the input
    SerializationError(BoxError),
    /// An error occurred building the endpoint or URI
    InvalidUri(BoxError),
}

/// An error that occurs while building an input, a model shape or an operation request.
///
/// The error is raised before anything is sent. Display output names the offending field.
#[derive(Debug)]
pub struct BuildError {
    kind: BuildErrorKind,
}

impl BuildError {
    /// Construct a build error for a missing field
    pub fn missing_field(field: &'static str, details: &'static str) -> Self {
        Self {
            kind: BuildErrorKind::MissingField { field, details },
        }
    }

    /// Construct a build error for a field holding a value that breaks a modeled constraint
    pub fn invalid_field(field: &'static str, details: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: BuildErrorKind::InvalidField {
                field,
                details: details.into(),
            },
        }
    }

    /// Construct a build error for a serialization failure
    pub fn serialization(source: impl Into<BoxError>) -> Self {
        Self {
            kind: BuildErrorKind::SerializationError(source.into()),
        }
    }

    /// Construct a build error for an endpoint or URI that could not be assembled
    pub fn invalid_uri(source: impl Into<BoxError>) -> Self {
        Self {
            kind: BuildErrorKind::InvalidUri(source.into()),
        }
    }

    /// Returns the name of the field this error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match &self.kind {
            BuildErrorKind::MissingField { field, .. }
            | BuildErrorKind::InvalidField { field, .. } => Some(field),
            BuildErrorKind::SerializationError(_) | BuildErrorKind::InvalidUri(_) => None,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BuildErrorKind::MissingField { field, details } => {
                write!(f, "{} was missing: {}", field, details)
            }
            BuildErrorKind::InvalidField { field, details } => {
                write!(f, "invalid field in input: {} (details: {})", field, details)
            }
            BuildErrorKind::SerializationError(_) => {
                write!(f, "failed to serialize input")
            }
            BuildErrorKind::InvalidUri(_) => write!(f, "generated URI was invalid"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BuildErrorKind::SerializationError(source) | BuildErrorKind::InvalidUri(source) => {
                Some(source.as_ref() as _)
            }
            BuildErrorKind::MissingField { .. } | BuildErrorKind::InvalidField { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BuildError, Error, ErrorMetadata};
    use std::error::Error as _;

    struct Wrapper(Error);

    impl ErrorMetadata for Wrapper {
        fn meta(&self) -> &Error {
            &self.0
        }
    }

    #[test]
    fn metadata_accessors_delegate() {
        let err = Wrapper(
            Error::builder()
                .code("Throttling")
                .message("slow down")
                .request_id("abc-123")
                .build(),
        );
        assert_eq!(err.code(), Some("Throttling"));
        assert_eq!(err.message(), Some("slow down"));
        assert_eq!(err.request_id(), Some("abc-123"));
    }

    #[test]
    fn display_only_prints_populated_fields() {
        let err = Error::builder().code("Throttling").build();
        assert_eq!(format!("{}", err), "Error { code: \"Throttling\" }");
    }

    #[test]
    fn build_error_messages() {
        let missing = BuildError::missing_field("load_balancer_name", "a name is required");
        assert_eq!(
            missing.to_string(),
            "load_balancer_name was missing: a name is required"
        );
        assert_eq!(missing.field(), Some("load_balancer_name"));
        assert!(missing.source().is_none());

        let invalid = BuildError::invalid_field("page_token", "must match ^\\d{13}-\\w{6}$");
        assert!(invalid.to_string().contains("page_token"));

        let serialization = BuildError::serialization("boom");
        assert_eq!(serialization.field(), None);
        assert!(serialization.source().is_some());
    }
}
