//! CSV loader for NASA NeoWs close-approach exports.
//!
//! Each row describes one close approach together with the attributes of
//! the approaching body. Columns are matched by header name; columns not
//! listed on [`NeoRecord`] are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use neo_core::date::is_iso_date;
use neo_core::error::NeoError;
use neo_core::{ApproachEvent, CelestialBody, Diameter, Hazard};

use crate::RecordStore;

/// One CSV row, named after the source columns.
#[derive(Debug, Clone, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub estimated_diameter_min_kilometers: f64,
    pub estimated_diameter_max_kilometers: f64,
    pub estimated_diameter_min_meters: f64,
    pub estimated_diameter_max_meters: f64,
    pub estimated_diameter_min_miles: f64,
    pub estimated_diameter_max_miles: f64,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: String,
    pub close_approach_date: String,
    pub miss_distance_kilometers: f64,
    pub miss_distance_miles: f64,
    pub orbiting_body: String,
}

impl NeoRecord {
    /// Split the row into body attributes and its approach.
    ///
    /// # Errors
    ///
    /// Returns [`NeoError::Load`] if the date is not fixed-width ISO or a
    /// diameter is negative.
    pub fn into_parts(self) -> Result<(CelestialBody, ApproachEvent), NeoError> {
        if !is_iso_date(&self.close_approach_date) {
            return Err(NeoError::Load(format!(
                "{}: close_approach_date `{}` is not YYYY-MM-DD",
                self.name, self.close_approach_date
            )));
        }
        let diameters = [
            self.estimated_diameter_min_kilometers,
            self.estimated_diameter_max_kilometers,
            self.estimated_diameter_min_meters,
            self.estimated_diameter_max_meters,
            self.estimated_diameter_min_miles,
            self.estimated_diameter_max_miles,
        ];
        if diameters.iter().any(|d| *d < 0.0) {
            return Err(NeoError::Load(format!(
                "{}: estimated diameter cannot be negative",
                self.name
            )));
        }

        let approach = ApproachEvent {
            body_id: self.id.clone(),
            body_name: self.name.clone(),
            orbiting_body: self.orbiting_body,
            close_approach_date: self.close_approach_date,
            miss_distance_km: self.miss_distance_kilometers,
            miss_distance_miles: self.miss_distance_miles,
        };
        let body = CelestialBody {
            id: self.id,
            name: self.name,
            diameter_km: Diameter {
                min: self.estimated_diameter_min_kilometers,
                max: self.estimated_diameter_max_kilometers,
            },
            diameter_m: Diameter {
                min: self.estimated_diameter_min_meters,
                max: self.estimated_diameter_max_meters,
            },
            diameter_miles: Diameter {
                min: self.estimated_diameter_min_miles,
                max: self.estimated_diameter_max_miles,
            },
            is_hazardous: Hazard::parse_flag(&self.is_potentially_hazardous_asteroid),
            approaches: Vec::new(),
        };
        Ok((body, approach))
    }
}

/// Load a record store from a CSV file.
///
/// # Errors
///
/// Returns [`NeoError::Io`] if the file cannot be opened and
/// [`NeoError::Load`] for malformed rows.
pub fn load_path(path: &Path) -> Result<RecordStore, NeoError> {
    let file = File::open(path)?;
    let store = load_reader(file).map_err(|e| match e {
        NeoError::Load(msg) => NeoError::Load(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    tracing::info!(
        path = %path.display(),
        bodies = store.len(),
        approaches = store.approach_count(),
        dates = store.date_count(),
        "loaded records"
    );
    Ok(store)
}

/// Load a record store from any CSV source with a header row.
///
/// # Errors
///
/// Returns [`NeoError::Load`] for unreadable or malformed rows.
pub fn load_reader<R: Read>(reader: R) -> Result<RecordStore, NeoError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| NeoError::Load(format!("header: {e}")))?
        .clone();
    let mut store = RecordStore::new();

    for row in csv_reader.records() {
        let row = row.map_err(|e| match e.position() {
            Some(pos) => NeoError::Load(format!("line {}: {e}", pos.line())),
            None => NeoError::Load(e.to_string()),
        })?;
        // Physical line the record starts on; quoted fields may span lines.
        let line = row.position().map_or(0, csv::Position::line);
        let at_line = |msg: String| NeoError::Load(format!("line {line}: {msg}"));

        let record: NeoRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| at_line(e.to_string()))?;
        let (body, approach) = record.into_parts().map_err(|e| match e {
            NeoError::Load(msg) => at_line(msg),
            other => other,
        })?;
        store.insert(body, approach);
    }

    Ok(store)
}
