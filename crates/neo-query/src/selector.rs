//! Compiled query descriptor consumed by the search engine.

use neo_core::EntityKind;

use crate::filter::Filter;

/// Which close-approach dates a query selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelection {
    /// Exactly one date.
    Exact(String),
    /// `start..=end`; a `None` bound leaves that side open.
    Range {
        start: Option<String>,
        end: Option<String>,
    },
}

/// A compiled query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub dates: DateSelection,
    /// Maximum number of results; `None` returns everything.
    pub limit: Option<usize>,
    /// Filters in request order. The engine applies body filters first.
    pub filters: Vec<Filter>,
    pub target: EntityKind,
}
