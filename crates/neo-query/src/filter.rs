//! Filter expressions: `field:operator:value` → typed predicates.
//!
//! Each field targets one entity kind. Body filters keep or drop whole
//! bodies; event filters narrow each body's approaches and drop bodies left
//! with none. Filters work on owned snapshots, never on store entities.

use std::str::FromStr;

use neo_core::{CelestialBody, ConfigError, EntityKind};

/// Fields a filter can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Minimum estimated diameter in kilometers.
    Diameter,
    /// Hazard flag, compared as lowercase text.
    IsHazardous,
    /// Miss distance of each approach in kilometers.
    Distance,
}

impl FilterField {
    pub const NAMES: &'static [&'static str] = &["diameter", "is_hazardous", "distance"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diameter => "diameter",
            Self::IsHazardous => "is_hazardous",
            Self::Distance => "distance",
        }
    }

    /// The entity kind this field is read from.
    #[must_use]
    pub fn target(self) -> EntityKind {
        match self {
            Self::Diameter | Self::IsHazardous => EntityKind::Body,
            Self::Distance => EntityKind::Event,
        }
    }
}

impl FromStr for FilterField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diameter" => Ok(Self::Diameter),
            "is_hazardous" => Ok(Self::IsHazardous),
            "distance" => Ok(Self::Distance),
            other => Err(ConfigError::UnknownFilterField {
                value: other.to_string(),
                accepted: Self::NAMES,
            }),
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Gt,
    Ge,
    Eq,
    Lt,
    Le,
}

impl Operator {
    pub const SYMBOLS: &'static [&'static str] = &[">", ">=", "=", "<", "<="];

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    /// Evaluate `lhs <op> rhs`.
    pub fn compare<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
            Self::Eq => lhs == rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            "=" => Ok(Self::Eq),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            other => Err(ConfigError::UnknownOperator {
                value: other.to_string(),
                accepted: Self::SYMBOLS,
            }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A compiled filter. The value stays as text until the filter is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: FilterField,
    pub op: Operator,
    pub value: String,
}

impl Filter {
    #[must_use]
    pub fn target(&self) -> EntityKind {
        self.field.target()
    }

    fn numeric_value(&self) -> Result<f64, ConfigError> {
        self.value
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidNumber {
                field: self.field.as_str().to_string(),
                value: self.value.clone(),
            })
    }

    /// Apply the filter to a working set of body snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a numeric field is given
    /// a value that does not parse as a number. The value is checked once
    /// per call, so this fails even when `bodies` is empty.
    pub fn apply(&self, bodies: Vec<CelestialBody>) -> Result<Vec<CelestialBody>, ConfigError> {
        let op = self.op;
        let kept = match self.field {
            FilterField::Diameter => {
                let threshold = self.numeric_value()?;
                bodies
                    .into_iter()
                    .filter(|b| op.compare(&b.diameter_km.min, &threshold))
                    .collect()
            }
            // Text comparison: operators other than `=` order lexicographically.
            FilterField::IsHazardous => {
                let wanted = self.value.to_lowercase();
                bodies
                    .into_iter()
                    .filter(|b| op.compare(b.is_hazardous.as_str(), wanted.as_str()))
                    .collect()
            }
            FilterField::Distance => {
                let threshold = self.numeric_value()?;
                bodies
                    .into_iter()
                    .filter_map(|mut b| {
                        b.approaches
                            .retain(|a| op.compare(&a.miss_distance_km, &threshold));
                        (!b.approaches.is_empty()).then_some(b)
                    })
                    .collect()
            }
        };
        Ok(kept)
    }
}

impl FromStr for Filter {
    type Err = ConfigError;

    /// Parse `field:operator:value`. The value may itself contain `:`.
    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        let mut parts = expression.splitn(3, ':');
        let (Some(field), Some(op), Some(value)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ConfigError::MalformedFilter {
                expression: expression.to_string(),
            });
        };
        Ok(Self {
            field: field.parse()?,
            op: op.parse()?,
            value: value.to_string(),
        })
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.field.as_str(), self.op, self.value)
    }
}

/// Compile raw filter expressions, preserving their order.
///
/// # Errors
///
/// Returns the first [`ConfigError`] encountered.
pub fn compile_filters<I, S>(expressions: I) -> Result<Vec<Filter>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    expressions
        .into_iter()
        .map(|expr| expr.as_ref().parse::<Filter>())
        .collect()
}

/// Filters split by the entity kind they target.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PartitionedFilters<'a> {
    pub body: Vec<&'a Filter>,
    pub event: Vec<&'a Filter>,
}

impl<'a> PartitionedFilters<'a> {
    /// Body filters followed by event filters, each in input order.
    pub fn in_application_order(&self) -> impl Iterator<Item = &'a Filter> + '_ {
        self.body.iter().chain(self.event.iter()).copied()
    }
}

/// Split filters by target in one pass, keeping each bucket's input order.
#[must_use]
pub fn partition(filters: &[Filter]) -> PartitionedFilters<'_> {
    let mut out = PartitionedFilters::default();
    for filter in filters {
        match filter.target() {
            EntityKind::Body => out.body.push(filter),
            EntityKind::Event => out.event.push(filter),
        }
    }
    out
}
