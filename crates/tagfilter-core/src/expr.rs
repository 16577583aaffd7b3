//! Filter-expression builder — the grid-side grammar fed to the rewrite layer.
//!
//! Mirrors what the grid's filter widgets emit before request preparation:
//! per-id collection-any lambdas for the tag filter editor, and the
//! `contains(field,[ids])` encoding for the plain `contains` filter
//! operation. The rewrite layer recognizes exactly these shapes.

use crate::types::TagId;

/// `field/any(t: t eq id)` — true when at least one element of the field's
/// collection equals `id`.
pub fn any_expr(field: &str, id: TagId) -> String {
    format!("{field}/any(t: t eq {id})")
}

/// Conjunction of [`any_expr`] tests, one per selected id, joined with
/// ` and `. An empty selection builds no filter at all.
pub fn all_of(field: &str, ids: &[TagId]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    Some(
        ids.iter()
            .map(|id| any_expr(field, *id))
            .collect::<Vec<_>>()
            .join(" and "),
    )
}

/// `contains(field,[a,b,c])` — the encoding the grid emits for the
/// `contains` filter operation. Not valid for the index as-is; the rewrite
/// layer expands it before dispatch.
pub fn contains_expr(field: &str, ids: &[TagId]) -> String {
    let list = ids
        .iter()
        .map(TagId::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("contains({field},[{list}])")
}
