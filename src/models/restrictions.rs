//! Restriction targets and penalty weights.
//!
//! Restrictions define what a fully satisfying timetable looks like:
//! exact per-class occupancy targets, per-teacher load bounds, and
//! per-hour-slot capacities. Each category carries its own penalty weight
//! (ponderation); fitness is the negated weighted deviation sum.

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bounds on a teacher's total assignment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBounds {
    /// Minimum total assignments.
    pub min: u32,
    /// Maximum total assignments.
    pub max: u32,
}

impl LoadBounds {
    /// Creates load bounds.
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `load` lies within the bounds.
    #[inline]
    pub fn contains(&self, load: u32) -> bool {
        load >= self.min && load <= self.max
    }

    /// Distance from `load` to the nearest bound; `0` inside the range.
    #[inline]
    pub fn distance(&self, load: u32) -> u32 {
        if load < self.min {
            self.min - load
        } else if load > self.max {
            load - self.max
        } else {
            0
        }
    }
}

/// Restriction targets for a timetabling problem.
///
/// Table lengths define the class/teacher/slot index spaces; every index
/// referenced by a [`Teacher`](super::Teacher) must lie within them.
///
/// # Penalty semantics
///
/// - Class occupancy is an exact target: deviation in either direction is
///   penalized.
/// - Teacher load is penalized only outside its `[min, max]` bounds.
/// - Slot occupancy is penalized only above capacity (rooms available at
///   that hour).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restrictions {
    /// Target occupancy per class.
    pub class_targets: Vec<u32>,
    /// Load bounds per teacher; parallel to the teacher list.
    pub teacher_loads: Vec<LoadBounds>,
    /// Room capacity per hour slot.
    pub slot_capacities: Vec<u32>,
    /// Penalty weight for class-target deviation.
    pub class_weight: f64,
    /// Penalty weight for out-of-bounds teacher load.
    pub teacher_weight: f64,
    /// Penalty weight for over-capacity slots.
    pub slot_weight: f64,
}

impl Default for Restrictions {
    fn default() -> Self {
        Self {
            class_targets: Vec::new(),
            teacher_loads: Vec::new(),
            slot_capacities: Vec::new(),
            class_weight: 1.0,
            teacher_weight: 1.0,
            slot_weight: 1.0,
        }
    }
}

impl Restrictions {
    /// Creates empty restrictions with unit weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-class occupancy targets.
    pub fn with_class_targets(mut self, targets: Vec<u32>) -> Self {
        self.class_targets = targets;
        self
    }

    /// Sets the per-teacher load bounds.
    pub fn with_teacher_loads(mut self, loads: Vec<LoadBounds>) -> Self {
        self.teacher_loads = loads;
        self
    }

    /// Sets the per-slot capacities.
    pub fn with_slot_capacities(mut self, capacities: Vec<u32>) -> Self {
        self.slot_capacities = capacities;
        self
    }

    /// Sets the class-deviation penalty weight.
    pub fn with_class_weight(mut self, weight: f64) -> Self {
        self.class_weight = weight;
        self
    }

    /// Sets the teacher-load penalty weight.
    pub fn with_teacher_weight(mut self, weight: f64) -> Self {
        self.teacher_weight = weight;
        self
    }

    /// Sets the slot-capacity penalty weight.
    pub fn with_slot_weight(mut self, weight: f64) -> Self {
        self.slot_weight = weight;
        self
    }

    /// Number of classes in the problem.
    pub fn num_classes(&self) -> usize {
        self.class_targets.len()
    }

    /// Number of teachers in the problem.
    pub fn num_teachers(&self) -> usize {
        self.teacher_loads.len()
    }

    /// Number of hour slots in the problem.
    pub fn num_slots(&self) -> usize {
        self.slot_capacities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bounds() {
        let bounds = LoadBounds::new(2, 4);
        assert!(!bounds.contains(1));
        assert!(bounds.contains(2));
        assert!(bounds.contains(4));
        assert!(!bounds.contains(5));

        assert_eq!(bounds.distance(0), 2);
        assert_eq!(bounds.distance(2), 0);
        assert_eq!(bounds.distance(3), 0);
        assert_eq!(bounds.distance(7), 3);
    }

    #[test]
    fn test_restrictions_builder() {
        let restrictions = Restrictions::new()
            .with_class_targets(vec![2, 2, 3])
            .with_teacher_loads(vec![LoadBounds::new(1, 2), LoadBounds::new(3, 4)])
            .with_slot_capacities(vec![4, 4, 4, 4])
            .with_class_weight(2.0)
            .with_teacher_weight(0.5)
            .with_slot_weight(3.0);

        assert_eq!(restrictions.num_classes(), 3);
        assert_eq!(restrictions.num_teachers(), 2);
        assert_eq!(restrictions.num_slots(), 4);
        assert!((restrictions.class_weight - 2.0).abs() < 1e-10);
        assert!((restrictions.teacher_weight - 0.5).abs() < 1e-10);
        assert!((restrictions.slot_weight - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_default_unit_weights() {
        let restrictions = Restrictions::new();
        assert!((restrictions.class_weight - 1.0).abs() < 1e-10);
        assert!((restrictions.teacher_weight - 1.0).abs() < 1e-10);
        assert!((restrictions.slot_weight - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_restrictions_serde() {
        let restrictions = Restrictions::new()
            .with_class_targets(vec![1, 1])
            .with_teacher_loads(vec![LoadBounds::new(0, 2)])
            .with_slot_capacities(vec![1, 1]);

        let json = serde_json::to_string(&restrictions).unwrap();
        let back: Restrictions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.class_targets, vec![1, 1]);
        assert_eq!(back.teacher_loads[0], LoadBounds::new(0, 2));
    }
}
