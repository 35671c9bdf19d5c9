//! CelestialBody: a tracked object and its recorded approaches.

use serde::{Deserialize, Serialize};

use crate::approach::ApproachEvent;

/// Estimated diameter bounds in one unit system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Diameter {
    pub min: f64,
    pub max: f64,
}

/// Tri-state hazard flag: the source data may leave it blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Hazard {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Hazard {
    /// Parses the source flag. Only `true`/`True`/`TRUE` and the matching
    /// `false` spellings are recognized; anything else is unknown.
    #[must_use]
    pub fn parse_flag(raw: &str) -> Self {
        match raw.trim() {
            "true" | "True" | "TRUE" => Self::Yes,
            "false" | "False" | "FALSE" => Self::No,
            _ => Self::Unknown,
        }
    }

    /// Lowercase text form used by `is_hazardous` filter comparisons.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "true",
            Self::No => "false",
            Self::Unknown => "none",
        }
    }
}

impl From<Option<bool>> for Hazard {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

impl From<Hazard> for Option<bool> {
    fn from(hazard: Hazard) -> Self {
        match hazard {
            Hazard::Yes => Some(true),
            Hazard::No => Some(false),
            Hazard::Unknown => None,
        }
    }
}

/// A near-Earth object, keyed by its unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    pub diameter_km: Diameter,
    pub diameter_m: Diameter,
    pub diameter_miles: Diameter,
    pub is_hazardous: Hazard,
    /// Approaches in load order.
    #[serde(default)]
    pub approaches: Vec<ApproachEvent>,
}

impl CelestialBody {
    /// Dates of every recorded approach, in collection order.
    pub fn approach_dates(&self) -> impl Iterator<Item = &str> {
        self.approaches
            .iter()
            .map(|a| a.close_approach_date.as_str())
    }
}

impl std::fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dates: Vec<&str> = self.approach_dates().collect();
        write!(
            f,
            "Id: {} Name: {} Approaches: {} Dates: {}",
            self.id,
            self.name,
            self.approaches.len(),
            dates.join(", ")
        )
    }
}
