use assert_json_diff::assert_json_eq_no_panic;
use http::Request;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam { expected: String },
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam { expected: String },
    #[error("missing form param: expected `{expected}`, found {found:?}")]
    MissingFormParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden form param present: `{expected}`")]
    ForbiddenFormParam { expected: String },
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("body did not match. hint: {hint}\nexpected: {expected}\nfound: {found}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed: {}", e);
    }
}

/// `key=value` pairs of a query string or a form-encoded body, kept encoded.
struct Params<'a>(HashSet<&'a str>);

impl<'a> Params<'a> {
    fn parse(encoded: &'a str) -> Self {
        Params(encoded.split('&').filter(|p| !p.is_empty()).collect())
    }

    fn contains(&self, param: &str) -> bool {
        self.0.contains(param)
    }

    fn keys(&self) -> HashSet<&'a str> {
        self.0
            .iter()
            .map(|param| param.split('=').next().unwrap_or_default())
            .collect()
    }

    fn to_vec(&self) -> Vec<String> {
        let mut params: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        params.sort();
        params
    }
}

fn query_params<B>(request: &Request<B>) -> Params<'_> {
    Params::parse(request.uri().query().unwrap_or_default())
}

fn form_params<B: AsRef<[u8]>>(request: &Request<B>) -> Result<Params<'_>, ProtocolTestFailure> {
    let body = std::str::from_utf8(request.body().as_ref()).map_err(|e| {
        ProtocolTestFailure::InvalidBodyFormat {
            expected: "x-www-form-urlencoded".to_owned(),
            found: e.to_string(),
        }
    })?;
    Ok(Params::parse(body))
}

/// Where a set of parameters was read from; selects the failure reported for it.
#[derive(Clone, Copy)]
enum Location {
    Query,
    Form,
}

fn expect_params(
    actual: &Params<'_>,
    expected_params: &[&str],
    location: Location,
) -> Result<(), ProtocolTestFailure> {
    match expected_params.iter().find(|param| !actual.contains(**param)) {
        None => Ok(()),
        Some(param) => {
            let (expected, found) = (param.to_string(), actual.to_vec());
            Err(match location {
                Location::Query => ProtocolTestFailure::MissingQueryParam { expected, found },
                Location::Form => ProtocolTestFailure::MissingFormParam { expected, found },
            })
        }
    }
}

fn reject_keys(
    actual: &Params<'_>,
    forbidden: &[&str],
    location: Location,
) -> Result<(), ProtocolTestFailure> {
    let keys = actual.keys();
    match forbidden.iter().find(|key| keys.contains(**key)) {
        None => Ok(()),
        Some(key) => {
            let expected = key.to_string();
            Err(match location {
                Location::Query => ProtocolTestFailure::ForbiddenQueryParam { expected },
                Location::Form => ProtocolTestFailure::ForbiddenFormParam { expected },
            })
        }
    }
}

/// Checks that every `key=value` pair in `expected_params` is present in the query string.
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    expect_params(&query_params(request), expected_params, Location::Query)
}

/// Checks that none of `forbid_keys` appear as query parameter keys, whatever their value.
pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    reject_keys(&query_params(request), forbid_keys, Location::Query)
}

pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let keys = query_params(request).keys();
    match require_keys.iter().find(|key| !keys.contains(**key)) {
        None => Ok(()),
        Some(key) => Err(ProtocolTestFailure::RequiredQueryParam {
            expected: key.to_string(),
        }),
    }
}

/// Checks that every `key=value` pair in `expected_params` is present in a form-encoded body.
///
/// Values are compared in their encoded form.
pub fn validate_form_body<B: AsRef<[u8]>>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    expect_params(&form_params(request)?, expected_params, Location::Form)
}

/// Checks that none of `forbid_keys` appear as keys in a form-encoded body.
pub fn forbid_form_params<B: AsRef<[u8]>>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    reject_keys(&form_params(request)?, forbid_keys, Location::Form)
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Protocol tests store header lists as comma-delimited
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-ascii header value>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

/// Compares two JSON documents structurally. Key order and whitespace are ignored.
pub fn validate_json(actual: &[u8], expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual = std::str::from_utf8(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
        expected: "json".to_owned(),
        found: e.to_string(),
    })?;
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{}: {}", e, actual),
        })?;
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("expected document is not JSON: {}", e),
        })?;
    assert_json_eq_no_panic(&actual_json, &expected_json).map_err(|hint| {
        ProtocolTestFailure::BodyDidNotMatch {
            expected: expected.to_string(),
            found: actual.to_string(),
            hint,
        }
    })
}
