//! Reusable field validators
//!
//! Each constructor returns a closure taking the field name and the value to
//! check. The player rules in [`super::rules`] are assembled from these.

use crate::core::error::FieldViolation;
use chrono::{DateTime, Utc};

/// Validator: field must be present
pub fn required<'a, T>(
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, FieldViolation> {
    value.ok_or_else(|| FieldViolation::new(field, format!("'{}' is required", field)))
}

/// Validator: trimmed string length must be within `min..=max` characters
///
/// Length is counted in characters on the trimmed text; the caller keeps the
/// original string.
pub fn trimmed_length(
    min: usize,
    max: usize,
) -> impl Fn(&'static str, &str) -> Result<(), FieldViolation> + Send + Sync + Clone {
    move |field: &'static str, value: &str| {
        let len = value.trim().chars().count();
        if len < min {
            Err(FieldViolation::new(
                field,
                format!("'{}' must be at least {} characters (got {})", field, min, len),
            ))
        } else if len > max {
            Err(FieldViolation::new(
                field,
                format!("'{}' must be at most {} characters (got {})", field, max, len),
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: integer must be within `min..=max`
pub fn int_range(
    min: i64,
    max: i64,
) -> impl Fn(&'static str, i64) -> Result<(), FieldViolation> + Send + Sync + Clone {
    move |field: &'static str, value: i64| {
        if value < min {
            Err(FieldViolation::new(
                field,
                format!("'{}' must be at least {} (got {})", field, min, value),
            ))
        } else if value > max {
            Err(FieldViolation::new(
                field,
                format!("'{}' must be at most {} (got {})", field, max, value),
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: instant must fall strictly between two epoch-millisecond bounds
pub fn open_interval(
    after_millis: i64,
    before_millis: i64,
) -> impl Fn(&'static str, DateTime<Utc>) -> Result<(), FieldViolation> + Send + Sync + Clone {
    move |field: &'static str, value: DateTime<Utc>| {
        let millis = value.timestamp_millis();
        if millis > after_millis && millis < before_millis {
            Ok(())
        } else {
            Err(FieldViolation::new(
                field,
                format!(
                    "'{}' must be strictly between {} and {} (got {})",
                    field, after_millis, before_millis, millis
                ),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === required() ===

    #[test]
    fn test_required_missing_value_returns_error() {
        let result = required::<String>("name", None);
        assert!(result.unwrap_err().message.contains("required"));
    }

    #[test]
    fn test_required_present_value_passes_through() {
        let value = "Abc".to_string();
        assert_eq!(required("name", Some(&value)).unwrap(), "Abc");
    }

    #[test]
    fn test_required_result_borrows_from_the_value() {
        fn title_of(title: &Option<String>) -> Option<&str> {
            required("title", title.as_ref()).ok().map(String::as_str)
        }

        let title = Some("Chief".to_string());
        assert_eq!(title_of(&title), Some("Chief"));
        assert_eq!(title_of(&None), None);
    }

    // === trimmed_length() ===

    #[test]
    fn test_trimmed_length_counts_trimmed_characters() {
        let v = trimmed_length(1, 3);
        assert!(v("name", "  abc  ").is_ok());
        assert!(v("name", " abcd ").is_err());
    }

    #[test]
    fn test_trimmed_length_blank_is_too_short() {
        let v = trimmed_length(1, 12);
        let err = v("name", "   ").unwrap_err();
        assert_eq!(err.field, "name");
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_trimmed_length_counts_chars_not_bytes() {
        let v = trimmed_length(1, 3);
        assert!(v("name", "äöü").is_ok());
    }

    // === int_range() ===

    #[test]
    fn test_int_range_bounds_are_inclusive() {
        let v = int_range(0, 10);
        assert!(v("experience", 0).is_ok());
        assert!(v("experience", 10).is_ok());
        assert!(v("experience", -1).is_err());
        assert!(v("experience", 11).unwrap_err().message.contains("at most 10"));
    }

    // === open_interval() ===

    #[test]
    fn test_open_interval_excludes_both_bounds() {
        let v = open_interval(0, 1_000);
        let at = |ms| DateTime::from_timestamp_millis(ms).unwrap();

        assert!(v("birthday", at(0)).is_err());
        assert!(v("birthday", at(1)).is_ok());
        assert!(v("birthday", at(999)).is_ok());
        assert!(v("birthday", at(1_000)).is_err());
    }
}
