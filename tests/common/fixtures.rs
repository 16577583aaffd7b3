//! Static filter-string corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative `$filter`
//! values exactly as the grid emits them.

/// Filters carrying the redundant `eq true` comparison artifact.
pub const CORPUS_ANY_EQ_TRUE: &[&str] = &[
    "TagIds/any(t: t eq 123) eq true",
    "TagIds/any(t: t eq 1) eq true and TagIds/any(t: t eq 2) eq true",
    "(TagIds/any(t: t eq 7) eq true) and Name eq 'Document 1'",
    "Id eq '42' and TagIds/any(t: t eq 10) eq true",
];

/// Filters carrying the grid's `contains` encoding.
pub const CORPUS_CONTAINS: &[&str] = &[
    "contains(TagIds,[1,2,3])",
    "contains(TagIds,[5])",
    "contains(TagIds,[10,20]) and Id eq '42'",
    "contains(TagIds,[])",
];

/// Filters neither transform may touch. Spacing, casing, and field-name
/// variants that fall outside the emitted grammar pass through unchanged.
pub const CORPUS_PASSTHROUGH: &[&str] = &[
    "Id eq '42'",
    "Name eq 'Document 1' and Year ge 2020",
    // different field
    "OtherIds/any(t: t eq 123) eq true",
    // missing space after the range variable
    "TagIds/any(t:t eq 123) eq true",
    // operator casing
    "TagIds/any(t: t eq 123) EQ TRUE",
    // non-numeric id
    "TagIds/any(t: t eq abc) eq true",
    // scalar contains, no bracketed list
    "contains(Name,'doc')",
    // wrong list separator
    "contains(TagIds,[1;2])",
    "substringof('doc', Name)",
];

/// Mixed corpus combining both rewrite shapes and untouched clauses.
pub const CORPUS_MIXED: &[&str] = &[
    "TagIds/any(t: t eq 3) eq true and contains(TagIds,[4,5])",
    "contains(TagIds,[1]) and Name eq 'x' and TagIds/any(t: t eq 2) eq true",
    "Year ge 2020 and contains(TagIds,[6,7,8]) and Id ne '0'",
];
