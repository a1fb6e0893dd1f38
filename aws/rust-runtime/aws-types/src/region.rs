/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// An AWS region such as `us-east-1`.
///
/// Service configs use it to pick the regional endpoint, e.g.
/// `https://elasticloadbalancing.us-east-1.amazonaws.com`. No validation is performed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Source of a [`Region`], consulted once when a service config is built.
pub trait ProvideRegion {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

/// Load a region from environment variables
///
/// `AWS_REGION` is checked first, then `AWS_DEFAULT_REGION`. Empty values are ignored.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct EnvironmentProvider {
    env: Env,
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    #[doc(hidden)]
    pub fn new_with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        let region = ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .filter_map(|key| self.env.get(key))
            .find(|value| !value.trim().is_empty())
            .map(Region::new);
        tracing::debug!(region = ?region, "loaded region from the environment");
        region
    }
}
