//! Input validation for timetabling problems.
//!
//! Checks structural integrity of teachers and restriction tables before
//! compiling the problem encoding. Detects:
//! - Duplicate hours or classes within one teacher
//! - Hour/class indices outside the restriction tables
//! - Teachers that can never be scheduled
//! - Restriction tables inconsistent with the teacher list
//!
//! The search engine itself trusts a compiled encoding (see
//! [`TimetableProblem::is_consistent`](crate::problem::TimetableProblem::is_consistent));
//! validation happens once, here, at the input boundary.

use std::collections::HashSet;

use crate::models::{Restrictions, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A teacher lists the same hour twice.
    DuplicateHour,
    /// A teacher lists the same class twice.
    DuplicateClass,
    /// An hour index exceeds the slot capacity table.
    UnknownHour,
    /// A class index exceeds the class target table.
    UnknownClass,
    /// A teacher has no available hours or no assignable classes.
    UnschedulableTeacher,
    /// The teacher load table length differs from the teacher list.
    LoadTableMismatch,
    /// A teacher's load bounds have `min > max`.
    InvertedLoadBounds,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling problem.
///
/// Checks:
/// 1. Every teacher has at least one hour and one class
/// 2. No duplicate hours or classes within a teacher
/// 3. All hour indices lie within the slot capacity table
/// 4. All class indices lie within the class target table
/// 5. The load bounds table matches the teacher list, with `min <= max`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(teachers: &[Teacher], restrictions: &Restrictions) -> ValidationResult {
    let mut errors = Vec::new();

    for teacher in teachers {
        if !teacher.is_schedulable() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnschedulableTeacher,
                format!("Teacher '{}' has no hours or no classes", teacher.id),
            ));
        }

        let mut seen_hours = HashSet::new();
        for &hour in &teacher.hours {
            if !seen_hours.insert(hour) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateHour,
                    format!("Teacher '{}' lists hour {hour} twice", teacher.id),
                ));
            }
            if hour >= restrictions.num_slots() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownHour,
                    format!(
                        "Teacher '{}' references hour {hour} beyond the {} capacity slots",
                        teacher.id,
                        restrictions.num_slots()
                    ),
                ));
            }
        }

        let mut seen_classes = HashSet::new();
        for &class in &teacher.classes {
            if !seen_classes.insert(class) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateClass,
                    format!("Teacher '{}' lists class {class} twice", teacher.id),
                ));
            }
            if class >= restrictions.num_classes() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownClass,
                    format!(
                        "Teacher '{}' references class {class} beyond the {} class targets",
                        teacher.id,
                        restrictions.num_classes()
                    ),
                ));
            }
        }
    }

    if restrictions.num_teachers() != teachers.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LoadTableMismatch,
            format!(
                "{} load bounds for {} teachers",
                restrictions.num_teachers(),
                teachers.len()
            ),
        ));
    }

    for (index, bounds) in restrictions.teacher_loads.iter().enumerate() {
        if bounds.min > bounds.max {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedLoadBounds,
                format!(
                    "Teacher {index} load bounds inverted: min {} > max {}",
                    bounds.min, bounds.max
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
