/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the Smithy AWS Query protocol

use std::borrow::Cow;
use urlencoding::encode;

/// Writes an AWS Query request body (`application/x-www-form-urlencoded`).
///
/// The body always begins with the `Action` and `Version` parameters. Members are addressed by
/// dotted prefixes, e.g. `LoadBalancerAttributes.AccessLog.Enabled=true`.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    /// Starts writing the top-level member `prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {
        // Calling this drops the writer; nothing needs to be flushed.
    }
}

/// Writes a list. Entries are numbered from 1.
#[must_use]
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flat: bool,
        member_override: Option<&'a str>,
    ) -> Self {
        QueryListWriter {
            output,
            prefix,
            flat,
            member_override,
            next_index: 1,
        }
    }

    /// Starts the next list entry.
    pub fn entry(&mut self) -> QueryValueWriter {
        let entry_prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!(
                "{}.{}.{}",
                self.prefix,
                self.member_override.unwrap_or("member"),
                self.next_index
            )
        };
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(entry_prefix))
    }

    /// Finishes the list. A list with no entries is still sent, as an empty `prefix=` parameter.
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param_name();
        }
    }
}

/// Writes a single value (or a nested prefix) at a dotted parameter name.
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> QueryValueWriter<'a> {
        QueryValueWriter { output, prefix }
    }

    /// Starts a nested member, appending `.prefix` to the parameter name.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    /// Writes a boolean as `true` or `false`.
    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(if value { "true" } else { "false" });
    }

    /// Writes an integer.
    pub fn integer(mut self, value: i64) {
        self.write_param_name();
        self.output.push_str(&value.to_string());
    }

    /// Writes a string, percent-encoding it.
    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    /// Starts a list. `flat` lists omit the `member` segment; `member_override` replaces it.
    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter::new(self.output, self.prefix, flat, member_override)
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}
