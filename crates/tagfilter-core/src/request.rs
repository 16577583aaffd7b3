//! Request preparation — the hook that runs on every outgoing search request
//! after its parameters are populated and before dispatch.
//!
//! Transport lives elsewhere; this layer only shapes the parameter and
//! header maps. [`before_send`] applies the filter rewrites to the `$filter`
//! parameter, injects the service api version, and attaches the api key
//! header when one is configured.

use crate::config::ServiceConfig;
use crate::rewrite;
use serde::Serialize;
use std::collections::BTreeMap;

/// Query parameter carrying the filter predicate.
pub const FILTER_PARAM: &str = "$filter";
/// Query parameter selecting the service protocol version.
pub const API_VERSION_PARAM: &str = "api-version";
/// Header carrying the service api key.
pub const API_KEY_HEADER: &str = "api-key";

/// Parameters and headers of one outgoing search request.
///
/// Maps are ordered so prepared requests serialize deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestOptions {
    pub params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a query parameter, replacing any existing value.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Rewrite the `$filter` parameter and attach service credentials.
///
/// A filter that collapses to nothing is removed from the request entirely:
/// the index treats a missing `$filter` as "match all" but rejects an empty
/// one. Callers invoke this exactly once per request, after populating the
/// parameters and before dispatch.
pub fn before_send(options: &mut RequestOptions, service: &ServiceConfig) {
    let rewritten = options
        .params
        .get(FILTER_PARAM)
        .map(|filter| rewrite::rewrite_filter(filter));
    match rewritten {
        Some(Some(filter)) => {
            options.params.insert(FILTER_PARAM.to_string(), filter);
        }
        Some(None) => {
            tracing::debug!("filter collapsed to nothing, omitting parameter");
            options.params.remove(FILTER_PARAM);
        }
        None => {}
    }

    options
        .params
        .insert(API_VERSION_PARAM.to_string(), service.api_version.clone());
    if let Some(key) = &service.api_key {
        options
            .headers
            .insert(API_KEY_HEADER.to_string(), key.clone());
    }
}
