//! Test builders — ergonomic constructors for filter strings and
//! [`RequestOptions`] fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use tagfilter_core::expr;
use tagfilter_core::request::RequestOptions;
use tagfilter_core::types::TagId;

// ---------------------------------------------------------------------------
// Filter-string constructors
// ---------------------------------------------------------------------------

/// Wrap raw ids.
pub fn tags(ids: &[u64]) -> Vec<TagId> {
    ids.iter().copied().map(TagId).collect()
}

/// The filter the grid emits for the tag editor column: per-id any-lambdas,
/// each wrapped in the builder's trailing `eq true`, joined with ` and `.
pub fn editor_filter(ids: &[u64]) -> String {
    tags(ids)
        .iter()
        .map(|id| format!("{} eq true", expr::any_expr("TagIds", *id)))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// The filter the grid emits for the `contains` filter-operation column.
pub fn contains_filter(ids: &[u64]) -> String {
    expr::contains_expr("TagIds", &tags(ids))
}

// ---------------------------------------------------------------------------
// RequestOptionsBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RequestOptions`] test fixtures.
///
/// # Example
///
/// ```rust
/// let options = RequestOptionsBuilder::new()
///     .filter("contains(TagIds,[1,2])")
///     .param("$top", "20")
///     .build();
/// ```
pub struct RequestOptionsBuilder {
    options: RequestOptions,
}

impl RequestOptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: RequestOptions::new(),
        }
    }

    /// Set the `$filter` parameter.
    pub fn filter(self, filter: impl Into<String>) -> Self {
        self.param("$filter", filter)
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.params.insert(key.into(), value.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> RequestOptions {
        self.options
    }
}

impl Default for RequestOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
