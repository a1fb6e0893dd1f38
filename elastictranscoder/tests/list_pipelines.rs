/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use elastictranscoder::error::ListPipelinesErrorKind;
use elastictranscoder::input::ListPipelinesInput;
use elastictranscoder::paginator::ListPipelinesPaginator;
use elastictranscoder::{Config, Region, SdkError};
use pretty_assertions::assert_eq;
use protocol_test_helpers::{
    assert_ok, forbid_query_params, require_query_params, validate_json, validate_query_string,
};
use smithy_types::ErrorMetadata;
use std::collections::VecDeque;
use std::error::Error;
use std::sync::{Arc, Mutex};
use tokio_stream::StreamExt;

type BoxError = Box<dyn Error + Send + Sync>;

fn config() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header("x-amzn-requestid", "e5c6d0ba-EXAMPLE")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

const TWO_PIPELINES: &str = r#"{
  "Pipelines": [
    {
      "Id": "1111111111111-abcde1",
      "Name": "Tokyo-Default",
      "Status": "Active",
      "InputBucket": "salesoffice-tokyo-storage-input",
      "Role": "arn:aws:iam::123456789012:role/Elastic_Transcoder_Default_Role",
      "Notifications": {"Completed": "", "Error": "arn:aws:sns:us-east-1:111222333444:ETS_Errors", "Progressing": "", "Warning": ""},
      "ContentConfig": {"Bucket": "salesoffice-tokyo-storage-output", "StorageClass": "Standard", "Permissions": []},
      "ThumbnailConfig": {"Bucket": "salesoffice-tokyo-storage-thumbs", "StorageClass": "ReducedRedundancy"}
    },
    {
      "Id": "2222222222222-abcde2",
      "Name": "Osaka-Default",
      "Status": "Paused"
    }
  ],
  "NextPageToken": null
}"#;

#[test]
fn request_without_paging() {
    let op = ListPipelinesInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request();
    assert_eq!(request.method(), "GET");
    assert_eq!(request.uri().path(), "/2012-09-25/pipelines");
    assert_ok(forbid_query_params(request, &["Ascending", "PageToken"]));
}

#[test]
fn request_with_paging() {
    let op = ListPipelinesInput::builder()
        .ascending(true)
        .page_token("1111111111111-abcde1")
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap();
    let request = op.request();
    assert_ok(validate_query_string(
        request,
        &["Ascending=true", "PageToken=1111111111111-abcde1"],
    ));
    assert_ok(require_query_params(request, &["PageToken"]));
}

#[test]
fn output_parses_pipelines() {
    let (_, parts) = ListPipelinesInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let output = parts
        .parse_response(response(200, TWO_PIPELINES))
        .expect("valid response")
        .parsed;
    assert_eq!(output.next_page_token(), None);
    let names: Vec<_> = output.pipelines().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec![Some("Tokyo-Default"), Some("Osaka-Default")]);
    let tokyo = &output.pipelines()[0];
    assert_eq!(
        tokyo.thumbnail_config().and_then(|c| c.storage_class()),
        Some("ReducedRedundancy")
    );
    assert!(tokyo.content_config().unwrap().permissions().is_empty());
    assert_eq!(output.pipelines()[1].status(), Some("Paused"));

    // serializing back keeps only what the service sent
    let reserialized = serde_json::to_vec(&output.pipelines()[1]).unwrap();
    assert_ok(validate_json(
        &reserialized,
        r#"{"Id": "2222222222222-abcde2", "Name": "Osaka-Default", "Status": "Paused"}"#,
    ));
}

#[test]
fn modeled_error_from_header() {
    let (_, parts) = ListPipelinesInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let raw = http::Response::builder()
        .status(400)
        .header(
            "x-amzn-errortype",
            "ValidationException:http://internal.amazon.com/coral/com.amazonaws.elastictranscoder.v20120925/",
        )
        .header("x-amzn-requestid", "e5c6d0ba-EXAMPLE")
        .body(Bytes::from_static(br#"{"message": "PageToken is invalid"}"#))
        .unwrap();
    let err = match parts.parse_response(raw) {
        Err(SdkError::ServiceError { err, .. }) => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_validation_exception());
    assert_eq!(err.code(), Some("ValidationException"));
    assert_eq!(err.request_id(), Some("e5c6d0ba-EXAMPLE"));
    assert_eq!(err.to_string(), "ValidationException: PageToken is invalid");
}

#[test]
fn modeled_error_from_body() {
    let (_, parts) = ListPipelinesInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let err = parts
        .parse_response(response(
            403,
            r#"{"__type": "com.amazonaws.elastictranscoder#AccessDeniedException", "Message": "not allowed"}"#,
        ))
        .unwrap_err()
        .into_service_error()
        .unwrap();
    match &err.kind {
        ListPipelinesErrorKind::AccessDeniedException(inner) => {
            assert_eq!(inner.message(), Some("not allowed"))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn unknown_error_code_is_unhandled() {
    let (_, parts) = ListPipelinesInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    let err = parts
        .parse_response(response(
            429,
            r#"{"__type": "ThrottlingException", "message": "Rate exceeded"}"#,
        ))
        .unwrap_err()
        .into_service_error()
        .unwrap();
    assert!(matches!(err.kind, ListPipelinesErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("ThrottlingException"));
    assert_eq!(err.message(), Some("Rate exceeded"));
}

#[test]
fn unparseable_success_body_is_unhandled() {
    let (_, parts) = ListPipelinesInput::builder()
        .build()
        .unwrap()
        .make_operation(&config())
        .unwrap()
        .into_request_response();
    match parts.parse_response(response(200, r#"{"Pipelines": "#)) {
        Err(SdkError::ServiceError { err, raw }) => {
            assert_eq!(raw.status(), 200);
            assert!(matches!(err.kind, ListPipelinesErrorKind::Unhandled(_)));
            assert_eq!(err.code(), None);
        }
        other => panic!("expected an unhandled service error, got {:?}", other),
    }
}

/// Serves canned responses in order and records the page token of every request.
fn canned(
    bodies: Vec<&'static str>,
) -> (
    Arc<Mutex<Vec<Option<String>>>>,
    impl FnMut(http::Request<Bytes>) -> std::future::Ready<Result<http::Response<Bytes>, BoxError>>,
) {
    let seen = Arc::new(Mutex::new(vec![]));
    let log = seen.clone();
    let mut bodies: VecDeque<_> = bodies.into();
    let send = move |request: http::Request<Bytes>| {
        let token = request.uri().query().and_then(|q| {
            q.split('&')
                .find_map(|kv| kv.strip_prefix("PageToken="))
                .map(str::to_string)
        });
        log.lock().unwrap().push(token);
        std::future::ready(match bodies.pop_front() {
            Some(body) => Ok(response(200, body)),
            None => Err(BoxError::from("no more canned responses")),
        })
    };
    (seen, send)
}

#[tokio::test]
async fn paginator_follows_next_page_token() {
    let (seen, send) = canned(vec![
        r#"{"Pipelines": [{"Id": "1111111111111-abcde1"}], "NextPageToken": "1111111111111-abcde1"}"#,
        r#"{"Pipelines": [{"Id": "2222222222222-abcde2"}, {"Id": "3333333333333-abcde3"}], "NextPageToken": "3333333333333-abcde3"}"#,
        r#"{"Pipelines": [{"Id": "4444444444444-abcde4"}]}"#,
    ]);
    let pipelines: Vec<_> = ListPipelinesPaginator::new(
        config(),
        ListPipelinesInput::builder().ascending(true),
        send,
    )
    .items()
    .collect::<Result<Vec<_>, _>>()
    .await
    .unwrap();
    let ids: Vec<_> = pipelines.iter().filter_map(|p| p.id()).collect();
    assert_eq!(
        ids,
        vec![
            "1111111111111-abcde1",
            "2222222222222-abcde2",
            "3333333333333-abcde3",
            "4444444444444-abcde4"
        ]
    );
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            None,
            Some("1111111111111-abcde1".to_string()),
            Some("3333333333333-abcde3".to_string())
        ]
    );
}

#[tokio::test]
async fn paginator_aborts_on_repeated_token() {
    let (seen, send) = canned(vec![
        r#"{"Pipelines": [], "NextPageToken": "1111111111111-abcde1"}"#,
        r#"{"Pipelines": [], "NextPageToken": "1111111111111-abcde1"}"#,
        r#"{"Pipelines": []}"#,
    ]);
    let mut pages =
        ListPipelinesPaginator::new(config(), ListPipelinesInput::builder(), send).send();
    let first = pages.next().await.unwrap().unwrap();
    assert_eq!(first.next_page_token(), Some("1111111111111-abcde1"));
    match pages.next().await {
        Some(Err(SdkError::ConstructionFailure(err))) => {
            assert!(err.to_string().contains("did not change"))
        }
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert!(pages.next().await.is_none());
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn paginator_surfaces_dispatch_and_service_errors() {
    let (_, send) = canned(vec![]);
    let mut pages =
        ListPipelinesPaginator::new(config(), ListPipelinesInput::builder(), send).send();
    assert!(matches!(
        pages.next().await,
        Some(Err(SdkError::DispatchFailure(_)))
    ));
    assert!(pages.next().await.is_none());

    let mut pages = ListPipelinesPaginator::new(
        config(),
        ListPipelinesInput::builder(),
        |_request| async {
            Ok::<_, BoxError>(response(
                500,
                r#"{"__type": "InternalServiceException", "message": "try again"}"#,
            ))
        },
    )
    .items();
    match pages.next().await {
        Some(Err(SdkError::ServiceError { err, raw })) => {
            assert_eq!(raw.status(), 500);
            assert!(err.is_internal_service_exception());
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert!(pages.next().await.is_none());
}
