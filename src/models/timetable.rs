//! Timetable (solution) model.
//!
//! A timetable is the decoded form of a search individual: one assignment
//! row per scheduled lesson, plus any restriction violations still present.
//! An infeasible best-effort result carries a non-empty violation list.

use serde::{Deserialize, Serialize};

/// A complete timetable (solution to a timetabling problem).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Scheduled lessons (teacher × hour × class).
    pub assignments: Vec<Assignment>,
    /// Restriction violations detected in this timetable.
    pub violations: Vec<Violation>,
}

/// A single scheduled lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Teacher index.
    pub teacher: usize,
    /// Hour slot.
    pub hour: usize,
    /// Class index.
    pub class: usize,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(teacher: usize, hour: usize, class: usize) -> Self {
        Self {
            teacher,
            hour,
            class,
        }
    }
}

/// A restriction violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Index of the violating class, teacher, or slot.
    pub entity: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of restriction violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Class occupancy differs from its exact target.
    ClassTargetMissed,
    /// Teacher load lies outside its `[min, max]` bounds.
    TeacherLoadOutOfBounds,
    /// More lessons in a slot than rooms available.
    SlotOverCapacity,
}

impl Violation {
    /// Creates a class-target violation.
    pub fn class_target_missed(class: usize, occupancy: u32, target: u32) -> Self {
        Self {
            kind: ViolationKind::ClassTargetMissed,
            entity: class,
            message: format!("Class {class}: occupancy {occupancy}, target {target}"),
        }
    }

    /// Creates a teacher-load violation.
    pub fn teacher_load_out_of_bounds(teacher: usize, load: u32, min: u32, max: u32) -> Self {
        Self {
            kind: ViolationKind::TeacherLoadOutOfBounds,
            entity: teacher,
            message: format!("Teacher {teacher}: load {load} outside [{min}, {max}]"),
        }
    }

    /// Creates a slot-capacity violation.
    pub fn slot_over_capacity(slot: usize, occupancy: u32, capacity: u32) -> Self {
        Self {
            kind: ViolationKind::SlotOverCapacity,
            entity: slot,
            message: format!("Slot {slot}: {occupancy} lessons, capacity {capacity}"),
        }
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds a violation.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the timetable satisfies every restriction.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of scheduled lessons.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns all lessons taught by a teacher.
    pub fn assignments_for_teacher(&self, teacher: usize) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.teacher == teacher)
            .collect()
    }

    /// Returns all lessons scheduled in an hour slot.
    pub fn assignments_at_hour(&self, hour: usize) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.hour == hour).collect()
    }

    /// Number of lessons scheduled for a class.
    pub fn class_occupancy(&self, class: usize) -> usize {
        self.assignments.iter().filter(|a| a.class == class).count()
    }
}
