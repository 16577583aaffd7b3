//! Rewrite layer — translates grid-emitted filter expressions into the
//! syntax the search index accepts.
//!
//! Two independent, total string transforms run in request order on the
//! `$filter` parameter of every outgoing search request:
//!
//! 1. [`strip_any_eq_true`] removes the trailing `eq true` the grid's filter
//!    builder appends to collection-membership tests. The index rejects
//!    comparing a function-call result to a literal.
//! 2. [`expand_contains`] rewrites `contains(TagIds,[...])` into a
//!    conjunction of per-id `TagIds/any(t: t eq <id>)` tests. The index has
//!    no native "any of these values" operator for the field.
//!
//! Both transforms fire only on exact pattern matches; anything else passes
//! through untouched. [`rewrite_filter`] composes them and reports "no value"
//! when the rewritten filter collapses to the empty string, so callers can
//! omit the parameter instead of sending an empty one.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Collection field the rewrites target. The grid emits this name verbatim.
pub const TAGS_FIELD: &str = "TagIds";

fn any_eq_true_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(TagIds/any\(t: t eq \d+\)) eq true").expect("valid any-eq-true regex")
    })
}

fn contains_list_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"contains\(TagIds,\[([\d,]*)\]\)").expect("valid contains-list regex")
    })
}

/// Drop the redundant `eq true` comparison the filter builder appends to
/// collection-membership tests.
///
/// `TagIds/any(t: t eq 123) eq true` becomes `TagIds/any(t: t eq 123)`. All
/// occurrences are rewritten; input with no occurrence comes back borrowed
/// and unchanged.
pub fn strip_any_eq_true(filter: &str) -> Cow<'_, str> {
    any_eq_true_re().replace_all(filter, "$1")
}

/// Expand `contains(TagIds,[1,2,3])` into a parenthesized conjunction of
/// per-id membership tests.
///
/// An empty bracketed list removes the clause instead of emitting an empty
/// parenthesis the index would reject. Empty segments inside the list are
/// skipped; a list with no usable ids behaves like the empty list. Returns
/// `None` when the result of all replacements is the empty string, so the
/// caller can omit the filter parameter entirely.
pub fn expand_contains(filter: &str) -> Option<String> {
    let expanded = contains_list_re().replace_all(filter, |caps: &regex::Captures<'_>| {
        let tests: Vec<String> = caps[1]
            .split(',')
            .filter(|id| !id.is_empty())
            .map(|id| format!("{TAGS_FIELD}/any(t: t eq {id})"))
            .collect();
        if tests.is_empty() {
            String::new()
        } else {
            format!("({})", tests.join(" and "))
        }
    });
    if expanded.is_empty() {
        None
    } else {
        Some(expanded.into_owned())
    }
}

/// Run both rewrites in request order: strip, then expand.
///
/// `None` means the filter collapsed to nothing and the `$filter` parameter
/// should be omitted from the request.
pub fn rewrite_filter(filter: &str) -> Option<String> {
    let stripped = strip_any_eq_true(filter);
    let rewritten = expand_contains(&stripped)?;
    if rewritten == filter && filter.contains(TAGS_FIELD) {
        // Either the filter is already in index syntax, or the grid's
        // emitted grammar drifted and the patterns stopped matching. The
        // rewrite stays a no-op by contract; surface it for triage.
        tracing::debug!(filter, "filter mentions the tags field but no rewrite applied");
    }
    Some(rewritten)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
