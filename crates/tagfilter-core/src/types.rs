//! Core types for tagfilter-core.
//!
//! This module defines the shared domain types: the [`TagId`] element of the
//! multi-valued tag association, and the boundary parsing for comma-separated
//! id lists as they arrive from the filter editor or the command line.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Integer-valued element of the multi-valued tag association on a document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TagId(pub u64);

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TagId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TagId)
    }
}

impl From<u64> for TagId {
    fn from(id: u64) -> Self {
        TagId(id)
    }
}

/// Failure to parse a comma-separated tag id list at an input boundary.
///
/// The rewrite layer itself has no error cases; only the places that accept
/// free-form id lists (filter editor, CLI) can fail.
#[derive(Debug, thiserror::Error)]
pub enum TagListError {
    #[error("invalid tag id {value:?}: {source}")]
    InvalidId {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Parse `"1,2,3"` into tag ids.
///
/// Whitespace around elements is accepted. Empty or whitespace-only input is
/// an empty selection, not an error; an empty element between commas is.
pub fn parse_tag_list(input: &str) -> Result<Vec<TagId>, TagListError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(|part| {
            part.parse().map_err(|source| TagListError::InvalidId {
                value: part.trim().to_string(),
                source,
            })
        })
        .collect()
}
