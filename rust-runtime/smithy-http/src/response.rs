/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// Parses structured data out of a fully loaded HTTP response.
///
/// Every operation in this workspace reads the whole body before parsing, so the parser only
/// ever sees `Response<Bytes>`. Keeping the parser pure and sync means it can be driven by any
/// transport and tested with hand-built responses.
pub trait ParseStrictResponse {
    /// Output type of the parser.
    ///
    /// For request/response style operations, this is `Result<{Op}Output, {Op}Error>`.
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}
