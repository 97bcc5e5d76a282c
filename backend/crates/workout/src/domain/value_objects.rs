//! Workout Value Objects
//!
//! Validated building blocks for a set. Each constructor returns an
//! `AppError` with kind `BadRequest` on invalid input.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SetId
// ============================================================================

/// Server-assigned set identifier (`sets.id SERIAL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetId(i32);

impl SetId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse a path segment; `None` when it is not an integer
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i32>().ok().map(Self)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Weight
// ============================================================================

/// Upper bound (exclusive) for `NUMERIC(10,2)`
pub const MAX_WEIGHT: f64 = 100_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight(f64);

impl Weight {
    /// Validated against the value as stored, i.e. rounded to two decimals
    pub fn new(value: f64) -> AppResult<Self> {
        let stored = (value * 100.0).round() / 100.0;
        if !value.is_finite() || stored <= 0.0 {
            return Err(AppError::bad_request("Weight must be a positive number"));
        }
        if stored >= MAX_WEIGHT {
            return Err(AppError::bad_request(format!(
                "Weight must be less than {}",
                MAX_WEIGHT
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

// ============================================================================
// Exercise
// ============================================================================

pub const MAX_EXERCISE_CHARS: usize = 100;

/// Exercise name, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise(String);

impl Exercise {
    pub fn new(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::bad_request("Exercise is required"));
        }
        if trimmed.chars().count() > MAX_EXERCISE_CHARS {
            return Err(AppError::bad_request(format!(
                "Exercise must be at most {} characters",
                MAX_EXERCISE_CHARS
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Repetitions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetitions(i32);

impl Repetitions {
    pub fn new(value: i64) -> AppResult<Self> {
        match i32::try_from(value) {
            Ok(v) if v > 0 => Ok(Self(v)),
            Ok(_) => Err(AppError::bad_request("Repetitions must be a positive integer")),
            Err(_) => Err(AppError::bad_request("Repetitions is out of range")),
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

// ============================================================================
// SetDraft
// ============================================================================

/// Client-writable fields of a set, validated together
#[derive(Debug, Clone, PartialEq)]
pub struct SetDraft {
    pub weight: Weight,
    pub exercise: Exercise,
    pub repetitions: Repetitions,
}

impl SetDraft {
    /// Validate raw, possibly missing, fields
    pub fn parse(
        weight: Option<f64>,
        exercise: Option<&str>,
        repetitions: Option<i64>,
    ) -> AppResult<Self> {
        let weight = weight.ok_or_else(|| AppError::bad_request("Weight is required"))?;
        let exercise = exercise.ok_or_else(|| AppError::bad_request("Exercise is required"))?;
        let repetitions =
            repetitions.ok_or_else(|| AppError::bad_request("Repetitions is required"))?;

        Ok(Self {
            weight: Weight::new(weight)?,
            exercise: Exercise::new(exercise)?,
            repetitions: Repetitions::new(repetitions)?,
        })
    }
}

// ============================================================================
// Page
// ============================================================================

pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Offset pagination window
///
/// Parsing is lenient: unparsable or out-of-range values fall back to
/// the defaults instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    /// `limit` outside `1..=max_limit` becomes `max_limit`; negative `skip` becomes 0
    pub fn clamped(skip: Option<&str>, limit: Option<&str>, max_limit: i64) -> Self {
        let skip = skip
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|s| *s >= 0)
            .unwrap_or(0);
        let limit = limit
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| (1..=max_limit).contains(l))
            .unwrap_or(max_limit);

        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_id_parse() {
        assert_eq!(SetId::parse("42"), Some(SetId::new(42)));
        assert_eq!(SetId::parse("-3"), Some(SetId::new(-3)));
        assert_eq!(SetId::parse("abc"), None);
        assert_eq!(SetId::parse("1.5"), None);
        assert_eq!(SetId::parse("99999999999"), None);
    }

    #[test]
    fn test_weight_bounds() {
        assert!(Weight::new(111.22).is_ok());
        assert!(Weight::new(0.01).is_ok());

        assert!(Weight::new(0.0).is_err());
        assert!(Weight::new(-5.0).is_err());
        assert!(Weight::new(f64::NAN).is_err());
        assert!(Weight::new(f64::INFINITY).is_err());
        assert!(Weight::new(MAX_WEIGHT).is_err());
        // rounds to 0.00
        assert!(Weight::new(0.004).is_err());
    }

    #[test]
    fn test_exercise_is_trimmed() {
        let exercise = Exercise::new("  squat ").unwrap();
        assert_eq!(exercise.as_str(), "squat");

        assert!(Exercise::new("   ").is_err());
        assert!(Exercise::new(&"x".repeat(MAX_EXERCISE_CHARS)).is_ok());
        assert!(Exercise::new(&"x".repeat(MAX_EXERCISE_CHARS + 1)).is_err());
    }

    #[test]
    fn test_repetitions_positive() {
        assert_eq!(Repetitions::new(10).unwrap().value(), 10);
        assert!(Repetitions::new(0).is_err());
        assert!(Repetitions::new(-1).is_err());
        assert!(Repetitions::new(i64::from(i32::MAX) + 1).is_err());
    }

    #[test]
    fn test_draft_reports_missing_field() {
        let err = SetDraft::parse(None, Some("squat"), Some(5)).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Weight is required");

        let err = SetDraft::parse(Some(10.0), Some("squat"), None).unwrap_err();
        assert_eq!(err.message(), "Repetitions is required");
    }

    #[test]
    fn test_page_defaults() {
        assert_eq!(Page::clamped(None, None, 10), Page { skip: 0, limit: 10 });
        assert_eq!(Page::clamped(Some("x"), Some("y"), 10), Page::default());
    }

    #[test]
    fn test_page_clamping() {
        assert_eq!(Page::clamped(Some("5"), Some("3"), 10), Page { skip: 5, limit: 3 });
        assert_eq!(Page::clamped(Some("-1"), Some("0"), 10), Page { skip: 0, limit: 10 });
        assert_eq!(Page::clamped(None, Some("11"), 10), Page { skip: 0, limit: 10 });
        assert_eq!(Page::clamped(None, Some("10"), 10).limit, 10);
        assert_eq!(Page::clamped(None, Some("1"), 10).limit, 1);
    }
}
