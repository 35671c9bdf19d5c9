//! Search engine: runs a [`Selector`] against a [`RecordStore`].
//!
//! Execution order:
//! 1. Date resolution over the date index → distinct body names
//! 2. Resolve bodies in the store's first-seen order (as snapshots)
//! 3. Body filters, then event filters, each in request order
//! 4. Projection to bodies or flattened approaches
//! 5. Truncation to the selector's limit
//!
//! The store is only read. Filters run on cloned bodies, so narrowing a
//! body's approaches never leaks into later queries.

use std::collections::HashSet;

use serde::Serialize;

use neo_core::{ApproachEvent, CelestialBody, EntityKind, Result};
use neo_index::RecordStore;

use crate::filter::partition;
use crate::selector::{DateSelection, Selector};

/// Search output tagged with the entity kind it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items")]
pub enum SearchResult {
    #[serde(rename = "Body")]
    Bodies(Vec<CelestialBody>),
    #[serde(rename = "Event")]
    Events(Vec<ApproachEvent>),
}

impl SearchResult {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Bodies(_) => EntityKind::Body,
            Self::Events(_) => EntityKind::Event,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bodies(items) => items.len(),
            Self::Events(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Executes selectors against a borrowed store.
pub struct SearchEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Run `selector` and return at most `selector.limit` items.
    ///
    /// # Errors
    ///
    /// Returns [`neo_core::NeoError::Config`] if a filter value cannot be
    /// coerced for its field.
    pub fn get_objects(&self, selector: &Selector) -> Result<SearchResult> {
        let names = self.names_for(&selector.dates);

        let mut bodies: Vec<CelestialBody> = self
            .store
            .bodies()
            .iter()
            .filter(|b| names.contains(b.name.as_str()))
            .cloned()
            .collect();
        tracing::debug!(
            dates = ?selector.dates,
            bodies = bodies.len(),
            "resolved date selection"
        );

        if !selector.filters.is_empty() {
            let filters = partition(&selector.filters);
            for filter in filters.in_application_order() {
                bodies = filter.apply(bodies)?;
                tracing::debug!(%filter, remaining = bodies.len(), "applied filter");
            }
        }

        let limit = selector.limit.unwrap_or(usize::MAX);
        let result = match selector.target {
            EntityKind::Body => SearchResult::Bodies(bodies.into_iter().take(limit).collect()),
            EntityKind::Event => SearchResult::Events(
                bodies
                    .into_iter()
                    .flat_map(|b| b.approaches)
                    .take(limit)
                    .collect(),
            ),
        };
        tracing::debug!(kind = %result.kind(), items = result.len(), "search complete");
        Ok(result)
    }

    fn names_for(&self, dates: &DateSelection) -> HashSet<&'a str> {
        match dates {
            DateSelection::Exact(date) => self.store.names_on(date).collect(),
            DateSelection::Range { start, end } => self
                .store
                .names_between(start.as_deref(), end.as_deref())
                .collect(),
        }
    }
}
