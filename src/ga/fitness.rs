//! Fitness model.
//!
//! Fitness is the negated sum of three weighted penalty categories:
//! class-target deviation (two-sided), out-of-bounds teacher load, and
//! over-capacity hour slots. [`TimetableProblem::evaluate`] recomputes it
//! from scratch — used once at individual creation and as the oracle in
//! tests. [`TimetableProblem::triple_penalty`] is the pure per-triple
//! contribution the operators add back and subtract around each counter
//! edit; because a triple's penalty depends only on the three counters it
//! touches, that add/edit/subtract sequence keeps the running fitness
//! exact with O(1) work.

use crate::ga::Individual;
use crate::problem::TimetableProblem;

impl TimetableProblem {
    /// Fully recomputes `individual`'s counters and fitness from its
    /// genes.
    pub fn evaluate(&self, individual: &mut Individual) {
        let encoding = &self.encoding;
        let restrictions = &self.restrictions;

        individual.class_occupancy = vec![0; restrictions.num_classes()];
        individual.teacher_load = vec![0; restrictions.num_teachers()];
        individual.slot_occupancy = vec![0; restrictions.num_slots()];

        for block in 0..encoding.num_blocks() {
            if let Some(idx) = individual.triple_index(encoding, block) {
                individual.class_occupancy[encoding.class_of(idx)] += 1;
                individual.teacher_load[encoding.teacher_of(idx)] += 1;
                individual.slot_occupancy[encoding.hour_of(idx)] += 1;
            }
        }

        let mut fitness = 0.0;
        for (class, &occupancy) in individual.class_occupancy.iter().enumerate() {
            fitness -= occupancy.abs_diff(restrictions.class_targets[class]) as f64
                * restrictions.class_weight;
        }
        for (teacher, &load) in individual.teacher_load.iter().enumerate() {
            fitness -= restrictions.teacher_loads[teacher].distance(load) as f64
                * restrictions.teacher_weight;
        }
        for (slot, &occupancy) in individual.slot_occupancy.iter().enumerate() {
            let capacity = restrictions.slot_capacities[slot];
            if occupancy > capacity {
                fitness -= (occupancy - capacity) as f64 * restrictions.slot_weight;
            }
        }
        individual.fitness = fitness;
    }

    /// Positive penalty attributable to triple `idx`'s class, teacher,
    /// and slot under `individual`'s current counters.
    ///
    /// Pure with respect to the counters; the operators call it exactly
    /// twice per edit (before and after the counter delta).
    pub(crate) fn triple_penalty(&self, individual: &Individual, idx: usize) -> f64 {
        let encoding = &self.encoding;
        let restrictions = &self.restrictions;

        let class = encoding.class_of(idx);
        let mut penalty = individual.class_occupancy[class]
            .abs_diff(restrictions.class_targets[class]) as f64
            * restrictions.class_weight;

        let slot = encoding.hour_of(idx);
        let capacity = restrictions.slot_capacities[slot];
        if individual.slot_occupancy[slot] > capacity {
            penalty +=
                (individual.slot_occupancy[slot] - capacity) as f64 * restrictions.slot_weight;
        }

        let teacher = encoding.teacher_of(idx);
        penalty += restrictions.teacher_loads[teacher].distance(individual.teacher_load[teacher])
            as f64
            * restrictions.teacher_weight;

        penalty
    }
}
