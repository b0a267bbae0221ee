//! Candidate timetable encoding.
//!
//! An individual is a fixed-length assignment vector (one gene per block)
//! plus three derived occupancy counters and a running fitness. The
//! counters and fitness are established once by full evaluation at
//! creation and afterwards maintained incrementally by the genetic
//! operators — they must always agree with what a recomputation from the
//! genes would produce.

use rand::Rng;

use crate::models::{Assignment, Timetable, Violation};
use crate::problem::{Encoding, TimetableProblem};

/// A candidate timetable.
///
/// Higher fitness = better; `0.0` satisfies every restriction
/// (maximization convention, fitness is never positive).
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// One gene per block: `None` = no class this hour, `Some(v)` = the
    /// block-relative index of the chosen candidate triple.
    pub assignment: Vec<Option<u32>>,
    /// Assigned-lesson count per class.
    pub class_occupancy: Vec<u32>,
    /// Assigned-lesson count per teacher.
    pub teacher_load: Vec<u32>,
    /// Assigned-lesson count per hour slot.
    pub slot_occupancy: Vec<u32>,
    /// Running fitness, kept in lockstep with the counters.
    pub fitness: f64,
}

/// Draws a gene uniformly from `{None} ∪ {0..block_len}`.
///
/// Shared by random initialization and mutation so both use the same
/// per-block distribution.
pub(crate) fn random_gene<R: Rng>(block_len: usize, rng: &mut R) -> Option<u32> {
    let draw = rng.random_range(0..=block_len as u32);
    if draw == 0 {
        None
    } else {
        Some(draw - 1)
    }
}

impl Individual {
    /// Creates an individual with uniformly random genes and a fully
    /// evaluated fitness.
    pub fn random<R: Rng>(problem: &TimetableProblem, rng: &mut R) -> Self {
        let encoding = &problem.encoding;
        let assignment = (0..encoding.num_blocks())
            .map(|b| random_gene(encoding.block_len(b), rng))
            .collect();

        let mut individual = Self {
            assignment,
            class_occupancy: Vec::new(),
            teacher_load: Vec::new(),
            slot_occupancy: Vec::new(),
            fitness: 0.0,
        };
        problem.evaluate(&mut individual);
        individual
    }

    /// Global triple index chosen in `block`, if any.
    #[inline]
    pub fn triple_index(&self, encoding: &Encoding, block: usize) -> Option<usize> {
        self.assignment[block].map(|v| encoding.block_start(block) + v as usize)
    }

    /// Number of blocks with an assigned class.
    pub fn assigned_count(&self) -> usize {
        self.assignment.iter().flatten().count()
    }

    /// Whether every restriction is satisfied.
    pub fn is_feasible(&self) -> bool {
        self.fitness == 0.0
    }

    /// Decodes this individual into a [`Timetable`] with violations.
    pub fn to_timetable(&self, problem: &TimetableProblem) -> Timetable {
        let encoding = &problem.encoding;
        let restrictions = &problem.restrictions;
        let mut timetable = Timetable::new();

        for block in 0..encoding.num_blocks() {
            if let Some(idx) = self.triple_index(encoding, block) {
                timetable.add_assignment(Assignment::new(
                    encoding.teacher_of(idx),
                    encoding.hour_of(idx),
                    encoding.class_of(idx),
                ));
            }
        }

        for (class, &occupancy) in self.class_occupancy.iter().enumerate() {
            let target = restrictions.class_targets[class];
            if occupancy != target {
                timetable.add_violation(Violation::class_target_missed(class, occupancy, target));
            }
        }
        for (teacher, &load) in self.teacher_load.iter().enumerate() {
            let bounds = restrictions.teacher_loads[teacher];
            if !bounds.contains(load) {
                timetable.add_violation(Violation::teacher_load_out_of_bounds(
                    teacher, load, bounds.min, bounds.max,
                ));
            }
        }
        for (slot, &occupancy) in self.slot_occupancy.iter().enumerate() {
            let capacity = restrictions.slot_capacities[slot];
            if occupancy > capacity {
                timetable.add_violation(Violation::slot_over_capacity(slot, occupancy, capacity));
            }
        }

        timetable
    }
}
