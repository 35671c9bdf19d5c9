//! Request mapping → [`Selector`].
//!
//! [`RawQuery`] is the loosely-typed request: the keys a caller may set,
//! with their short aliases. It deserializes from JSON, YAML or TOML so
//! queries can be saved to disk, and is also filled from CLI flags.

use serde::{Deserialize, Serialize};

use neo_core::date::is_iso_date;
use neo_core::{ConfigError, EntityKind};

use crate::filter::compile_filters;
use crate::selector::{DateSelection, Selector};

/// An uncompiled search request. Unrecognized keys are ignored.
///
/// Each of `number`, `date`, `start_date` and `end_date` may also be given
/// by its one-letter short key. When both spellings are present the long
/// key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RequestKeys")]
pub struct RawQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_object: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<String>,
}

/// Wire form of [`RawQuery`], with long and short keys held apart.
#[derive(Deserialize)]
struct RequestKeys {
    number: Option<usize>,
    n: Option<usize>,
    date: Option<String>,
    d: Option<String>,
    start_date: Option<String>,
    s: Option<String>,
    end_date: Option<String>,
    e: Option<String>,
    return_object: Option<String>,
    #[serde(default)]
    filter: Vec<String>,
}

impl From<RequestKeys> for RawQuery {
    fn from(keys: RequestKeys) -> Self {
        RawQuery {
            number: keys.number.or(keys.n),
            date: keys.date.or(keys.d),
            start_date: keys.start_date.or(keys.s),
            end_date: keys.end_date.or(keys.e),
            return_object: keys.return_object,
            filter: keys.filter,
        }
    }
}

impl RawQuery {
    /// Layer `overrides` on top of `self`: set values in `overrides` win,
    /// filters from both are kept with `self`'s first.
    #[must_use]
    pub fn merge(self, overrides: RawQuery) -> RawQuery {
        let mut filter = self.filter;
        filter.extend(overrides.filter);
        RawQuery {
            number: overrides.number.or(self.number),
            date: overrides.date.or(self.date),
            start_date: overrides.start_date.or(self.start_date),
            end_date: overrides.end_date.or(self.end_date),
            return_object: overrides.return_object.or(self.return_object),
            filter,
        }
    }
}

fn checked_date(key: &'static str, value: &str) -> Result<String, ConfigError> {
    if is_iso_date(value) {
        Ok(value.to_string())
    } else {
        Err(ConfigError::InvalidDate {
            key,
            value: value.to_string(),
        })
    }
}

/// Compile a request into a [`Selector`].
///
/// An exact `date` takes precedence; otherwise the query is a range over
/// `start_date..=end_date` with missing bounds left open.
///
/// # Errors
///
/// Returns a [`ConfigError`] for an unknown `return_object`, a malformed
/// date, or any filter the filter compiler rejects.
pub fn build(raw: &RawQuery) -> Result<Selector, ConfigError> {
    let dates = match &raw.date {
        Some(date) => DateSelection::Exact(checked_date("date", date)?),
        None => DateSelection::Range {
            start: raw
                .start_date
                .as_deref()
                .map(|d| checked_date("start_date", d))
                .transpose()?,
            end: raw
                .end_date
                .as_deref()
                .map(|d| checked_date("end_date", d))
                .transpose()?,
        },
    };

    let target = match raw.return_object.as_deref() {
        Some(tag) => tag.parse::<EntityKind>()?,
        None => EntityKind::default(),
    };

    let filters = compile_filters(&raw.filter)?;

    tracing::debug!(
        ?dates,
        limit = ?raw.number,
        filters = filters.len(),
        %target,
        "built selector"
    );

    Ok(Selector {
        dates,
        limit: raw.number,
        filters,
        target,
    })
}
