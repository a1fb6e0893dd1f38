/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use elasticloadbalancing::error::{
    DescribeLoadBalancerAttributesErrorKind, ModifyLoadBalancerAttributesErrorKind,
};
use elasticloadbalancing::input::{
    DescribeLoadBalancerAttributesInput, ModifyLoadBalancerAttributesInput,
};
use elasticloadbalancing::model::{
    AccessLog, AdditionalAttribute, ConnectionDraining, CrossZoneLoadBalancing,
    LoadBalancerAttributes,
};
use elasticloadbalancing::{Config, Region, SdkError};
use pretty_assertions::assert_eq;
use protocol_test_helpers::{assert_ok, forbid_form_params, validate_form_body, validate_headers};
use smithy_types::ErrorMetadata;

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn modify_request_serializes_populated_attributes() {
    let attributes = LoadBalancerAttributes::builder()
        .cross_zone_load_balancing(CrossZoneLoadBalancing::builder().enabled(true).build().unwrap())
        .access_log(
            AccessLog::builder()
                .enabled(true)
                .s3_bucket_name("my-logs")
                .emit_interval(5)
                .s3_bucket_prefix("prod/web")
                .build()
                .unwrap(),
        )
        .connection_draining(
            ConnectionDraining::builder()
                .enabled(false)
                .build()
                .unwrap(),
        )
        .additional_attributes(
            AdditionalAttribute::builder()
                .key("elb.http.desyncmitigationmode")
                .value("monitor")
                .build(),
        )
        .build();
    let input = ModifyLoadBalancerAttributesInput::builder()
        .load_balancer_name("web")
        .load_balancer_attributes(attributes)
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    let request = op.request();
    assert_eq!(request.method(), "POST");
    assert_eq!(
        request.uri(),
        "https://elasticloadbalancing.us-east-1.amazonaws.com/"
    );
    assert_ok(validate_headers(
        request,
        &[("content-type", "application/x-www-form-urlencoded")],
    ));
    assert_ok(validate_form_body(
        request,
        &[
            "Action=ModifyLoadBalancerAttributes",
            "Version=2012-06-01",
            "LoadBalancerName=web",
            "LoadBalancerAttributes.CrossZoneLoadBalancing.Enabled=true",
            "LoadBalancerAttributes.AccessLog.Enabled=true",
            "LoadBalancerAttributes.AccessLog.S3BucketName=my-logs",
            "LoadBalancerAttributes.AccessLog.EmitInterval=5",
            "LoadBalancerAttributes.AccessLog.S3BucketPrefix=prod%2Fweb",
            "LoadBalancerAttributes.ConnectionDraining.Enabled=false",
            "LoadBalancerAttributes.AdditionalAttributes.member.1.Key=elb.http.desyncmitigationmode",
            "LoadBalancerAttributes.AdditionalAttributes.member.1.Value=monitor",
        ],
    ));
    assert_ok(forbid_form_params(
        request,
        &[
            "LoadBalancerAttributes.ConnectionDraining.Timeout",
            "LoadBalancerAttributes.ConnectionSettings.IdleTimeout",
        ],
    ));
}

#[test]
fn unset_attributes_are_not_sent() {
    let input = ModifyLoadBalancerAttributesInput::builder()
        .load_balancer_name("web")
        .load_balancer_attributes(LoadBalancerAttributes::builder().build())
        .build()
        .unwrap();
    let op = input.make_operation(&config()).unwrap();
    assert_eq!(
        op.request().body().as_ref(),
        &b"Action=ModifyLoadBalancerAttributes&Version=2012-06-01&LoadBalancerName=web"[..]
    );
}

#[test]
fn describe_round_trip() {
    let input = DescribeLoadBalancerAttributesInput::builder()
        .load_balancer_name("web")
        .build()
        .unwrap();
    let (request, parts) = input
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    assert_ok(validate_form_body(
        &request,
        &[
            "Action=DescribeLoadBalancerAttributes",
            "LoadBalancerName=web",
        ],
    ));

    let raw = response(
        200,
        r#"<DescribeLoadBalancerAttributesResponse xmlns="http://elasticloadbalancing.amazonaws.com/doc/2012-06-01/">
  <DescribeLoadBalancerAttributesResult>
    <LoadBalancerAttributes>
      <AccessLog>
        <Enabled>true</Enabled>
        <S3BucketName>my-loadbalancer-logs</S3BucketName>
        <S3BucketPrefix>my-bucket-prefix/prod</S3BucketPrefix>
        <EmitInterval>60</EmitInterval>
      </AccessLog>
      <ConnectionDraining>
        <Enabled>true</Enabled>
        <Timeout>60</Timeout>
      </ConnectionDraining>
      <AdditionalAttributes/>
    </LoadBalancerAttributes>
  </DescribeLoadBalancerAttributesResult>
  <ResponseMetadata>
    <RequestId>83c88b9d-12b7-11e3-8b82-87b12EXAMPLE</RequestId>
  </ResponseMetadata>
</DescribeLoadBalancerAttributesResponse>"#,
    );
    let success = parts.parse_response(raw).expect("successful response");
    let expected = LoadBalancerAttributes::builder()
        .access_log(
            AccessLog::builder()
                .enabled(true)
                .s3_bucket_name("my-loadbalancer-logs")
                .s3_bucket_prefix("my-bucket-prefix/prod")
                .emit_interval(60)
                .build()
                .unwrap(),
        )
        .connection_draining(
            ConnectionDraining::builder()
                .enabled(true)
                .timeout(60)
                .build()
                .unwrap(),
        )
        .build();
    assert_eq!(success.parsed.load_balancer_attributes(), Some(&expected));
}

#[test]
fn modify_response_echoes_name() {
    let input = ModifyLoadBalancerAttributesInput::builder()
        .load_balancer_name("web")
        .load_balancer_attributes(LoadBalancerAttributes::default())
        .build()
        .unwrap();
    let (_, parts) = input
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let raw = response(
        200,
        r#"<ModifyLoadBalancerAttributesResponse>
  <ModifyLoadBalancerAttributesResult>
    <LoadBalancerName>web</LoadBalancerName>
    <LoadBalancerAttributes>
      <CrossZoneLoadBalancing><Enabled>true</Enabled></CrossZoneLoadBalancing>
    </LoadBalancerAttributes>
  </ModifyLoadBalancerAttributesResult>
</ModifyLoadBalancerAttributesResponse>"#,
    );
    let output = parts.parse_response(raw).unwrap().parsed;
    assert_eq!(output.load_balancer_name(), Some("web"));
    assert_eq!(
        output
            .load_balancer_attributes()
            .and_then(|attrs| attrs.cross_zone_load_balancing())
            .map(|czlb| czlb.enabled()),
        Some(true)
    );
    assert_eq!(
        output.to_string(),
        "{LoadBalancerName: web,LoadBalancerAttributes: {CrossZoneLoadBalancing: {Enabled: true},AdditionalAttributes: []}}"
    );
}

#[test]
fn modeled_error() {
    let input = DescribeLoadBalancerAttributesInput::builder()
        .load_balancer_name("missing")
        .build()
        .unwrap();
    let (_, parts) = input
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let raw = response(
        400,
        r#"<ErrorResponse xmlns="http://elasticloadbalancing.amazonaws.com/doc/2012-06-01/">
  <Error>
    <Type>Sender</Type>
    <Code>LoadBalancerNotFound</Code>
    <Message>There is no ACTIVE Load Balancer named 'missing'</Message>
  </Error>
  <RequestId>a4c1c1f2-EXAMPLE</RequestId>
</ErrorResponse>"#,
    );
    let err = match parts.parse_response(raw) {
        Err(SdkError::ServiceError { err, raw }) => {
            assert_eq!(raw.status(), 400);
            err
        }
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_access_point_not_found_exception());
    assert_eq!(err.code(), Some("LoadBalancerNotFound"));
    assert_eq!(err.request_id(), Some("a4c1c1f2-EXAMPLE"));
    match &err.kind {
        DescribeLoadBalancerAttributesErrorKind::AccessPointNotFoundException(inner) => {
            assert_eq!(
                inner.message(),
                Some("There is no ACTIVE Load Balancer named 'missing'")
            );
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "AccessPointNotFoundException [LoadBalancerNotFound]: There is no ACTIVE Load Balancer named 'missing'"
    );
}

#[test]
fn error_codes_are_scoped_per_operation() {
    let body = r#"<ErrorResponse>
  <Error>
    <Type>Sender</Type>
    <Code>InvalidConfigurationRequest</Code>
    <Message>Requested configuration change is invalid.</Message>
  </Error>
  <RequestId>req-1</RequestId>
</ErrorResponse>"#;

    let modify = ModifyLoadBalancerAttributesInput::builder()
        .load_balancer_name("web")
        .load_balancer_attributes(LoadBalancerAttributes::default())
        .build()
        .unwrap();
    let (_, parts) = modify
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let err = parts
        .parse_response(response(409, body))
        .unwrap_err()
        .into_service_error()
        .unwrap();
    assert!(matches!(
        err.kind,
        ModifyLoadBalancerAttributesErrorKind::InvalidConfigurationRequestException(_)
    ));

    let describe = DescribeLoadBalancerAttributesInput::builder()
        .load_balancer_name("web")
        .build()
        .unwrap();
    let (_, parts) = describe
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let err = parts
        .parse_response(response(409, body))
        .unwrap_err()
        .into_service_error()
        .unwrap();
    assert!(matches!(
        err.kind,
        DescribeLoadBalancerAttributesErrorKind::Unhandled(_)
    ));
    assert_eq!(err.code(), Some("InvalidConfigurationRequest"));
    assert_eq!(err.message(), Some("Requested configuration change is invalid."));
}

#[test]
fn unparseable_error_body_is_unhandled() {
    let describe = DescribeLoadBalancerAttributesInput::builder()
        .load_balancer_name("web")
        .build()
        .unwrap();
    let (_, parts) = describe
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let err = parts
        .parse_response(response(503, "Service Unavailable"))
        .unwrap_err()
        .into_service_error()
        .unwrap();
    assert!(matches!(
        err.kind,
        DescribeLoadBalancerAttributesErrorKind::Unhandled(_)
    ));
    assert_eq!(err.code(), None);
}
