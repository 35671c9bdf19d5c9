//! Entity kinds a query can target or return.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// The two entity kinds the store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityKind {
    /// A [`crate::CelestialBody`].
    #[default]
    Body,
    /// A single [`crate::ApproachEvent`].
    Event,
}

impl EntityKind {
    /// Accepted `return_object` tags, as listed in error messages.
    pub const NAMES: &'static [&'static str] = &["Body", "Event"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Body => "Body",
            Self::Event => "Event",
        }
    }
}

impl FromStr for EntityKind {
    type Err = ConfigError;

    /// Parses a `return_object` tag. `NEO` and `Path` are kept as
    /// aliases for older saved queries.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Body" | "NEO" => Ok(Self::Body),
            "Event" | "Path" => Ok(Self::Event),
            other => Err(ConfigError::UnknownReturnObject {
                value: other.to_string(),
                accepted: Self::NAMES,
            }),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
