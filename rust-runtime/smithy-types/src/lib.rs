/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared by generated service crates: generic error metadata, builder errors and the
//! field-list rendering used by model `Display` implementations.

pub mod display;
pub mod error;

pub use crate::error::{BuildError, Error, ErrorMetadata};
