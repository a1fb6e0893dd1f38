/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_xml::decode::{try_data, Document, ScopedDecoder, XmlError};
use std::convert::TryFrom;

/// Parses the code, message and request ID out of an awsQuery error body:
///
/// ```xml
/// <ErrorResponse>
///   <Error>
///     <Type>Sender</Type>
///     <Code>LoadBalancerNotFound</Code>
///     <Message>There is no ACTIVE Load Balancer named 'web'</Message>
///   </Error>
///   <RequestId>foo-id</RequestId>
/// </ErrorResponse>
/// ```
pub fn parse_generic_error(body: &[u8]) -> Result<smithy_types::Error, XmlError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    let mut err_builder = smithy_types::Error::builder();
    while let Some(mut tag) = root.next_tag() {
        match tag.start_el().local() {
            "Error" => {
                while let Some(mut error_field) = tag.next_tag() {
                    match error_field.start_el().local() {
                        "Code" => {
                            err_builder = err_builder.code(try_data(&mut error_field)?);
                        }
                        "Message" => {
                            err_builder = err_builder.message(try_data(&mut error_field)?);
                        }
                        _ => {}
                    }
                }
            }
            "RequestId" => {
                err_builder = err_builder.request_id(try_data(&mut tag)?);
            }
            _ => {}
        }
    }
    Ok(err_builder.build())
}

/// Positions a decoder on the `<Error>` element of an `<ErrorResponse>`.
pub fn error_scope<'a, 'b>(doc: &'a mut Document<'b>) -> Result<ScopedDecoder<'b, 'a>, XmlError> {
    let root = doc
        .next_start_element()
        .ok_or_else(|| XmlError::custom("no root found searching for an Error"))?;
    if !root.matches("ErrorResponse") {
        return Err(XmlError::custom("expected ErrorResponse as root"));
    }

    while let Some(el) = doc.next_start_element() {
        if el.matches("Error") && el.depth() == 1 {
            return Ok(doc.scoped_to(el));
        }
        // otherwise, ignore it
    }
    Err(XmlError::custom("No Error found inside of ErrorResponse"))
}

#[cfg(test)]
mod test {
    use super::{error_scope, parse_generic_error};
    use smithy_xml::decode::{try_data, Document};
    use std::convert::TryFrom;

    #[test]
    fn parse_wrapped_error() {
        let xml = br#"<ErrorResponse>
    <Error>
        <Type>Sender</Type>
        <Code>InvalidGreeting</Code>
        <Message>Hi</Message>
        <AnotherSetting>setting</AnotherSetting>
        <Ignore><This/></Ignore>
    </Error>
    <RequestId>foo-id</RequestId>
</ErrorResponse>"#;
        let parsed = parse_generic_error(xml).expect("valid xml");
        assert_eq!(parsed.request_id(), Some("foo-id"));
        assert_eq!(parsed.message(), Some("Hi"));
        assert_eq!(parsed.code(), Some("InvalidGreeting"));
    }

    #[test]
    fn test_error_scope() {
        let xml: &[u8] = br#"<ErrorResponse>
    <RequestId>foo-id</RequestId>
    <MorePreamble>foo-id</MorePreamble>
    <Sneaky><Error>These are not the errors you are looking for</Error></Sneaky>
    <Error>
        <Type>Sender</Type>
        <Code>InvalidGreeting</Code>
        <Message>Hi</Message>
        <AnotherSetting>setting</AnotherSetting>
        <Ignore><This/></Ignore>
    </Error>
    <RequestId>foo-id</RequestId>
</ErrorResponse>"#;
        let mut doc = Document::try_from(xml).expect("valid");
        let mut error = error_scope(&mut doc).expect("contains error");
        let mut keys = vec![];
        while let Some(tag) = error.next_tag() {
            keys.push(tag.start_el().local().to_owned());
        }
        assert_eq!(keys, vec!["Type", "Code", "Message", "AnotherSetting", "Ignore"]);
        let mut doc = Document::new("<ErrorResponse><Error><Code>c</Code></Error></ErrorResponse>");
        let mut error = error_scope(&mut doc).unwrap();
        let mut code = error.next_tag().unwrap();
        assert_eq!(try_data(&mut code).unwrap(), "c");
    }

    #[test]
    fn error_scope_requires_error_response_root() {
        let mut doc = Document::new("<Response><Error/></Response>");
        assert!(error_scope(&mut doc).is_err());
    }
}
