//! # neo-index
//!
//! In-memory record store for NEO close-approach data.
//!
//! Maintains two indices built once at load time:
//! - name → body, iterated in first-seen order
//! - close-approach date → bodies with an approach on that date
//!
//! Records are loaded from CSV by [`loader`].

pub mod loader;

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use neo_core::{ApproachEvent, CelestialBody};

pub use loader::{load_path, load_reader, NeoRecord};

/// The RecordStore owns every body and the indices over them.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    /// Bodies in first-seen order. Positions are stable.
    bodies: Vec<CelestialBody>,
    by_name: HashMap<String, usize>,
    /// Date → body positions, one entry per record (not deduplicated).
    by_date: BTreeMap<String, Vec<usize>>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one close-approach record.
    ///
    /// If a body with the same name is already stored, `approach` is appended
    /// to it and the attributes in `body` are discarded. Otherwise `body` is
    /// stored with `approach` as its only event.
    pub fn insert(&mut self, body: CelestialBody, approach: ApproachEvent) {
        let date = approach.close_approach_date.clone();
        let pos = match self.by_name.get(&body.name) {
            Some(&pos) => {
                self.bodies[pos].approaches.push(approach);
                pos
            }
            None => {
                let pos = self.bodies.len();
                self.by_name.insert(body.name.clone(), pos);
                let mut body = body;
                body.approaches = vec![approach];
                self.bodies.push(body);
                pos
            }
        };
        self.by_date.entry(date).or_default().push(pos);
    }

    /// All bodies in first-seen order.
    #[must_use]
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Look up a body by its unique name.
    #[must_use]
    pub fn body(&self, name: &str) -> Option<&CelestialBody> {
        self.by_name.get(name).map(|&pos| &self.bodies[pos])
    }

    /// Names of bodies with an approach on exactly `date`, repeats included.
    pub fn names_on<'a>(&'a self, date: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.by_date
            .get(date)
            .into_iter()
            .flatten()
            .map(move |&pos| self.bodies[pos].name.as_str())
    }

    /// Names of bodies with an approach dated within `start..=end`, repeats
    /// included. A `None` bound leaves that side open; an inverted range
    /// yields nothing.
    pub fn names_between<'a>(
        &'a self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let inverted = matches!((start, end), (Some(s), Some(e)) if s > e);
        let bounds = (
            start.map_or(Bound::Unbounded, Bound::Included),
            end.map_or(Bound::Unbounded, Bound::Included),
        );
        let entries = (!inverted).then(|| self.by_date.range::<str, _>(bounds));
        entries
            .into_iter()
            .flatten()
            .flat_map(move |(_, positions)| {
                positions
                    .iter()
                    .map(move |&pos| self.bodies[pos].name.as_str())
            })
    }

    /// Number of distinct bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of distinct close-approach dates.
    #[must_use]
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }

    /// Total approaches across all bodies.
    #[must_use]
    pub fn approach_count(&self) -> usize {
        self.bodies.iter().map(|b| b.approaches.len()).sum()
    }

    /// Earliest and latest stored dates.
    #[must_use]
    pub fn date_span(&self) -> Option<(&str, &str)> {
        let first = self.by_date.keys().next()?;
        let last = self.by_date.keys().next_back()?;
        Some((first.as_str(), last.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_core::{Diameter, Hazard};

    fn body(name: &str) -> CelestialBody {
        CelestialBody {
            id: format!("id-{name}"),
            name: name.to_string(),
            diameter_km: Diameter { min: 1.0, max: 2.0 },
            diameter_m: Diameter {
                min: 1000.0,
                max: 2000.0,
            },
            diameter_miles: Diameter { min: 0.6, max: 1.2 },
            is_hazardous: Hazard::Unknown,
            approaches: Vec::new(),
        }
    }

    fn approach(name: &str, date: &str) -> ApproachEvent {
        ApproachEvent {
            body_id: format!("id-{name}"),
            body_name: name.to_string(),
            orbiting_body: "Earth".to_string(),
            close_approach_date: date.to_string(),
            miss_distance_km: 1000.0,
            miss_distance_miles: 621.0,
        }
    }

    fn store() -> RecordStore {
        let mut store = RecordStore::new();
        store.insert(body("Eros"), approach("Eros", "2020-01-01"));
        store.insert(body("Apophis"), approach("Apophis", "2020-01-02"));
        store.insert(body("Eros"), approach("Eros", "2020-01-03"));
        store.insert(body("Bennu"), approach("Bennu", "2020-01-03"));
        store
    }

    #[test]
    fn repeated_name_appends_approach() {
        let store = store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.approach_count(), 4);
        let eros = store.body("Eros").unwrap();
        let dates: Vec<&str> = eros.approach_dates().collect();
        assert_eq!(dates, vec!["2020-01-01", "2020-01-03"]);
    }

    #[test]
    fn bodies_keep_first_seen_order() {
        let store = store();
        let names: Vec<&str> = store.bodies().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Eros", "Apophis", "Bennu"]);
    }

    #[test]
    fn names_on_exact_date() {
        let store = store();
        let names: Vec<&str> = store.names_on("2020-01-03").collect();
        assert_eq!(names, vec!["Eros", "Bennu"]);
        assert_eq!(store.names_on("2020-01-05").count(), 0);
    }

    #[test]
    fn names_between_is_inclusive() {
        let store = store();
        let names: Vec<&str> = store
            .names_between(Some("2020-01-01"), Some("2020-01-02"))
            .collect();
        assert_eq!(names, vec!["Eros", "Apophis"]);
    }

    #[test]
    fn names_between_open_bounds() {
        let store = store();
        assert_eq!(store.names_between(None, None).count(), 4);
        assert_eq!(store.names_between(Some("2020-01-03"), None).count(), 2);
        assert_eq!(store.names_between(None, Some("2020-01-01")).count(), 1);
    }

    #[test]
    fn names_between_inverted_range_is_empty() {
        let store = store();
        assert_eq!(
            store
                .names_between(Some("2020-01-03"), Some("2020-01-01"))
                .count(),
            0
        );
    }

    #[test]
    fn date_span_covers_all_dates() {
        let store = store();
        assert_eq!(store.date_count(), 3);
        assert_eq!(store.date_span(), Some(("2020-01-01", "2020-01-03")));
        assert_eq!(RecordStore::new().date_span(), None);
    }
}
