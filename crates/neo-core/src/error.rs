//! Error types for NEO search.

use thiserror::Error;

/// Top-level result type for NEO operations.
pub type Result<T> = std::result::Result<T, NeoError>;

/// Top-level error type for NEO search.
#[derive(Debug, Error)]
pub enum NeoError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("load error: {0}")]
    Load(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised for caller-supplied values outside a closed set.
///
/// Every variant names the rejected value and what would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("return_object `{value}` not found. Available return_objects: `{}`", .accepted.join(", "))]
    UnknownReturnObject {
        value: String,
        accepted: &'static [&'static str],
    },

    #[error("filter key `{value}` is not supported. Available filter keys: `{}`", .accepted.join(", "))]
    UnknownFilterField {
        value: String,
        accepted: &'static [&'static str],
    },

    #[error("filter operator `{value}` is not supported. Available operators: `{}`", .accepted.join(", "))]
    UnknownOperator {
        value: String,
        accepted: &'static [&'static str],
    },

    #[error("output format `{value}` is not supported. Available formats: `{}`", .accepted.join(", "))]
    UnknownOutputFormat {
        value: String,
        accepted: &'static [&'static str],
    },

    #[error("malformed filter `{expression}`: expected `field:operator:value`")]
    MalformedFilter { expression: String },

    #[error("filter `{field}` expects a number, got `{value}`")]
    InvalidNumber { field: String, value: String },

    #[error("invalid date `{value}` for `{key}`: expected YYYY-MM-DD")]
    InvalidDate { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_list_accepted_values() {
        let err = ConfigError::UnknownFilterField {
            value: "size".to_string(),
            accepted: &["diameter", "is_hazardous", "distance"],
        };
        let msg = err.to_string();
        assert!(msg.contains("`size`"));
        assert!(msg.contains("`diameter, is_hazardous, distance`"));
    }

    #[test]
    fn config_error_converts_into_neo_error() {
        let err: NeoError = ConfigError::MalformedFilter {
            expression: "diameter>1".to_string(),
        }
        .into();
        assert!(matches!(err, NeoError::Config(_)));
        assert!(err.to_string().starts_with("config error:"));
    }
}
