/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::XmlError;
use std::borrow::Cow;

/// Unescape XML encoded characters
///
/// This function will unescape the 5 literal escapes:
/// - `&lt;`, `&gt;`, `&amp;`, `&quot;`, and `&apos;`
/// As well as character escapes:
/// - Decimal escapes: `&#123;`
/// - Hex escapes: `&#xD;`
///
/// If no escape sequences are present, Cow<&'str> will be returned, avoiding the need
/// to copy the String.
pub(crate) fn unescape(s: &str) -> Result<Cow<str>, XmlError> {
    if !s.contains('&') {
        return Ok(Cow::Borrowed(s));
    }
    let mut res = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('&') {
        res.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = rest.find(';').ok_or_else(|| XmlError::InvalidEscape {
            esc: rest.chars().take(10).collect(),
        })?;
        let esc = &rest[1..end];
        match esc {
            "lt" => res.push('<'),
            "gt" => res.push('>'),
            "amp" => res.push('&'),
            "quot" => res.push('"'),
            "apos" => res.push('\''),
            _ => res.push(unescape_char(esc)?),
        }
        rest = &rest[end + 1..];
    }
    res.push_str(rest);
    Ok(Cow::Owned(res))
}

fn unescape_char(esc: &str) -> Result<char, XmlError> {
    let invalid = || XmlError::InvalidEscape {
        esc: esc.to_string(),
    };
    let code = if let Some(hex) = esc.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).map_err(|_| invalid())?
    } else if let Some(dec) = esc.strip_prefix('#') {
        dec.parse::<u32>().map_err(|_| invalid())?
    } else {
        return Err(invalid());
    };
    std::char::from_u32(code).ok_or_else(invalid)
}
