/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_types::BuildError;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Successful Sdk Result
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<Bytes>,
    pub parsed: O,
}

/// Failing Sdk Result
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<Bytes>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError { raw: http::Response<Bytes>, err: E },
}

impl<E> SdkError<E> {
    /// Returns the modeled service error, if the service returned one.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Converts into the modeled service error, if the service returned one.
    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Returns the raw HTTP response when one was received.
    pub fn raw_response(&self) -> Option<&http::Response<Bytes>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            SdkError::ConstructionFailure(_) | SdkError::DispatchFailure(_) => None,
        }
    }
}

impl<E> From<BuildError> for SdkError<E> {
    fn from(err: BuildError) -> Self {
        SdkError::ConstructionFailure(err.into())
    }
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { raw, err } => write!(
                f,
                "response could not be parsed (status {}): {}",
                raw.status(),
                err
            ),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}
