//! tagfilter — rewrites grid filter expressions into search-index syntax.
//!
//! A data grid builds `$filter` expressions in its own grammar; the search
//! index behind it accepts a narrower OData dialect for the collection-valued
//! `TagIds` field. This crate re-exports the core layers so integration
//! tests and the command-line binary can import them directly.
//!
//! # Architecture
//!
//! ```text
//! expr (grid grammar) ──► rewrite ──► request ──► transport (external)
//! ```
//!
//! The rewrite layer is pure and synchronous; request preparation runs it on
//! the `$filter` parameter of every outgoing request, once, after the
//! parameters are populated and before dispatch.

pub use tagfilter_core::{config, expr, request, rewrite, types};

pub use tagfilter_core::{before_send, RequestOptions};
pub use tagfilter_core::{expand_contains, rewrite_filter, strip_any_eq_true};
pub use tagfilter_core::{parse_tag_list, TagId, TagListError};
