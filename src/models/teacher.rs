//! Teacher availability model.
//!
//! A teacher declares the hour slots it is available in and the classes it
//! is qualified to teach. The per-teacher cross product of the two is the
//! candidate-assignment space the engine searches.

use serde::{Deserialize, Serialize};

/// A teacher with availability and teaching qualifications.
///
/// Hour and class values are indices into the corresponding tables of
/// [`Restrictions`](super::Restrictions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Hour slots this teacher is available in.
    pub hours: Vec<usize>,
    /// Classes this teacher may teach.
    pub classes: Vec<usize>,
}

impl Teacher {
    /// Creates a new teacher with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            hours: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the available hour slots.
    pub fn with_hours(mut self, hours: Vec<usize>) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the assignable classes.
    pub fn with_classes(mut self, classes: Vec<usize>) -> Self {
        self.classes = classes;
        self
    }

    /// Number of candidate (hour, class) assignments for this teacher.
    pub fn candidate_count(&self) -> usize {
        self.hours.len() * self.classes.len()
    }

    /// Whether this teacher can be scheduled at all.
    pub fn is_schedulable(&self) -> bool {
        !self.hours.is_empty() && !self.classes.is_empty()
    }
}
