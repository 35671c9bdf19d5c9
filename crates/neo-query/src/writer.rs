//! Result formatting: console lines, CSV, and JSON output.

use std::path::Path;
use std::str::FromStr;

use neo_core::{ConfigError, NeoError, Result};

use crate::engine::SearchResult;

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per item on the console.
    #[default]
    Display,
    /// Delimited file with a header row per entity kind.
    CsvFile,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["display", "csv_file", "json"];
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "display" => Ok(Self::Display),
            "csv_file" | "csv-file" | "csv" => Ok(Self::CsvFile),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnknownOutputFormat {
                value: other.to_string(),
                accepted: Self::NAMES,
            }),
        }
    }
}

pub const BODY_HEADER: [&str; 4] = ["id", "name", "approach_count", "approach_dates"];
pub const EVENT_HEADER: [&str; 3] = ["name", "miss_distance_km", "close_approach_date"];

/// Format search results in the specified output format.
///
/// # Errors
///
/// Returns [`NeoError::Serialization`] if CSV or JSON encoding fails.
pub fn format_results(result: &SearchResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Display => Ok(format_display(result)),
        OutputFormat::CsvFile => format_csv(result),
        OutputFormat::Json => format_json(result),
    }
}

fn format_display(result: &SearchResult) -> String {
    if result.is_empty() {
        return "(no results)".to_string();
    }

    let lines: Vec<String> = match result {
        SearchResult::Bodies(bodies) => bodies.iter().map(ToString::to_string).collect(),
        SearchResult::Events(events) => events.iter().map(ToString::to_string).collect(),
    };
    lines.join("\n")
}

fn format_csv(result: &SearchResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    let encode = |e: csv::Error| NeoError::Serialization(e.to_string());

    match result {
        SearchResult::Bodies(bodies) => {
            wtr.write_record(BODY_HEADER).map_err(encode)?;
            for body in bodies {
                let count = body.approaches.len().to_string();
                let dates = body.approach_dates().collect::<Vec<_>>().join(", ");
                wtr.write_record([
                    body.id.as_str(),
                    body.name.as_str(),
                    count.as_str(),
                    dates.as_str(),
                ])
                .map_err(encode)?;
            }
        }
        SearchResult::Events(events) => {
            wtr.write_record(EVENT_HEADER).map_err(encode)?;
            for event in events {
                let distance = event.miss_distance_km.to_string();
                wtr.write_record([
                    event.body_name.as_str(),
                    distance.as_str(),
                    event.close_approach_date.as_str(),
                ])
                .map_err(encode)?;
            }
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| NeoError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| NeoError::Serialization(e.to_string()))
}

fn format_json(result: &SearchResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| NeoError::Serialization(e.to_string()))
}

/// Write results as CSV to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`NeoError::Io`] if the file cannot be written.
pub fn write_csv_file(result: &SearchResult, path: &Path) -> Result<()> {
    if result.is_empty() {
        tracing::warn!(path = %path.display(), "no results; writing header only");
    }
    let csv = format_csv(result)?;
    std::fs::write(path, csv)?;
    tracing::info!(path = %path.display(), rows = result.len(), "wrote csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_core::{ApproachEvent, CelestialBody, Diameter, Hazard};

    fn event(name: &str, date: &str, km: f64) -> ApproachEvent {
        ApproachEvent {
            body_id: "2000433".to_string(),
            body_name: name.to_string(),
            orbiting_body: "Earth".to_string(),
            close_approach_date: date.to_string(),
            miss_distance_km: km,
            miss_distance_miles: km * 0.621_371,
        }
    }

    fn eros() -> CelestialBody {
        CelestialBody {
            id: "2000433".to_string(),
            name: "433 Eros (A898 PA)".to_string(),
            diameter_km: Diameter { min: 16.8, max: 37.6 },
            diameter_m: Diameter {
                min: 16_800.0,
                max: 37_600.0,
            },
            diameter_miles: Diameter {
                min: 10.4,
                max: 23.3,
            },
            is_hazardous: Hazard::No,
            approaches: vec![
                event("433 Eros (A898 PA)", "2020-01-01", 500.0),
                event("433 Eros (A898 PA)", "2020-01-03", 50_000.5),
            ],
        }
    }

    #[test]
    fn parse_output_formats() {
        assert_eq!("display".parse::<OutputFormat>().unwrap(), OutputFormat::Display);
        assert_eq!("csv_file".parse::<OutputFormat>().unwrap(), OutputFormat::CsvFile);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("display, csv_file, json"));
    }

    #[test]
    fn display_one_line_per_body() {
        let result = SearchResult::Bodies(vec![eros()]);
        let output = format_results(&result, OutputFormat::Display).unwrap();
        assert_eq!(
            output,
            "Id: 2000433 Name: 433 Eros (A898 PA) Approaches: 2 Dates: 2020-01-01, 2020-01-03"
        );
    }

    #[test]
    fn display_one_line_per_event() {
        let result = SearchResult::Events(eros().approaches);
        let output = format_results(&result, OutputFormat::Display).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("Miss Distance (km): 50000.5 Date: 2020-01-03"));
    }

    #[test]
    fn display_empty_result() {
        let result = SearchResult::Events(Vec::new());
        assert_eq!(
            format_results(&result, OutputFormat::Display).unwrap(),
            "(no results)"
        );
    }

    #[test]
    fn csv_body_rows_quote_joined_dates() {
        let result = SearchResult::Bodies(vec![eros()]);
        let output = format_results(&result, OutputFormat::CsvFile).unwrap();
        assert_eq!(
            output,
            "id,name,approach_count,approach_dates\n\
             2000433,433 Eros (A898 PA),2,\"2020-01-01, 2020-01-03\"\n"
        );
    }

    #[test]
    fn csv_event_rows() {
        let result = SearchResult::Events(eros().approaches);
        let output = format_results(&result, OutputFormat::CsvFile).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "name,miss_distance_km,close_approach_date");
        assert_eq!(lines[1], "433 Eros (A898 PA),500,2020-01-01");
        assert_eq!(lines[2], "433 Eros (A898 PA),50000.5,2020-01-03");
    }

    #[test]
    fn csv_empty_result_keeps_kind_header() {
        let result = SearchResult::Events(Vec::new());
        let output = format_results(&result, OutputFormat::CsvFile).unwrap();
        assert_eq!(output, "name,miss_distance_km,close_approach_date\n");
    }

    #[test]
    fn json_carries_kind_and_items() {
        let result = SearchResult::Bodies(vec![eros()]);
        let output = format_results(&result, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["kind"], "Body");
        assert_eq!(parsed["items"][0]["name"], "433 Eros (A898 PA)");
        assert_eq!(parsed["items"][0]["is_hazardous"], false);
    }

    #[test]
    fn write_csv_file_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neo_output.csv");
        std::fs::write(&path, "stale").unwrap();

        write_csv_file(&SearchResult::Bodies(vec![eros()]), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("id,name,approach_count,approach_dates\n"));
        assert!(!written.contains("stale"));
    }
}
