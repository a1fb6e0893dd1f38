/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Environment access that tests can replace with a fixed set of variables.

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Process environment, either the real one or a fixed map.
///
/// Tests run on many threads at once, so mutating the real environment from a test races with
/// every other test. Code that reads configuration takes an `Env` instead.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fake: Option<Arc<HashMap<String, String>>>,
}

impl Env {
    /// Returns the value of `key`, or `None` when it is unset.
    ///
    /// A real variable that is not valid unicode is treated as unset.
    pub fn get(&self, key: &str) -> Option<String> {
        match &self.fake {
            Some(vars) => vars.get(key).cloned(),
            None => match std::env::var(key) {
                Ok(value) => Some(value),
                Err(VarError::NotPresent) => None,
                Err(VarError::NotUnicode(_)) => {
                    tracing::warn!(key = %key, "ignoring environment variable that is not valid unicode");
                    None
                }
            },
        }
    }

    /// Fixed environment holding exactly `vars`.
    ///
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let env = Env::from_slice(&[("AWS_REGION", "eu-west-1")]);
    /// assert_eq!(env.get("AWS_REGION").as_deref(), Some("eu-west-1"));
    /// assert_eq!(env.get("AWS_DEFAULT_REGION"), None);
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    /// The environment of the running process.
    pub fn real() -> Self {
        Self { fake: None }
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        Self {
            fake: Some(Arc::new(vars)),
        }
    }
}
