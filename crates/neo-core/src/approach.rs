//! ApproachEvent: one recorded close approach of a body.

use serde::{Deserialize, Serialize};

/// A single close approach. Carries its owner's id and name by value so a
/// flattened event list can be rendered without the owning body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachEvent {
    pub body_id: String,
    pub body_name: String,
    /// Reference body for the approach (e.g. "Earth").
    pub orbiting_body: String,
    /// Fixed-width `YYYY-MM-DD`; string order equals chronological order.
    pub close_approach_date: String,
    pub miss_distance_km: f64,
    pub miss_distance_miles: f64,
}

impl std::fmt::Display for ApproachEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} Miss Distance (km): {} Date: {}",
            self.body_name, self.miss_distance_km, self.close_approach_date
        )
    }
}
