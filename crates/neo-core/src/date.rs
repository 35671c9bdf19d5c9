//! Close-approach date strings.
//!
//! Dates are kept as text and compared lexicographically, which only matches
//! chronological order for the fixed-width `YYYY-MM-DD` form.

use chrono::NaiveDate;

/// Format every stored and queried date must use.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `value` is a real calendar date in fixed-width `YYYY-MM-DD` form.
#[must_use]
pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_fixed_width_dates_only() {
        assert!(is_iso_date("2020-01-01"));
        assert!(is_iso_date("1900-12-31"));
        assert!(!is_iso_date("2020-1-1"));
        assert!(!is_iso_date("2020-02-30"));
        assert!(!is_iso_date("01/01/2020"));
        assert!(!is_iso_date(""));
    }
}
