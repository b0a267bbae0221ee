//! Genetic operators with incremental fitness maintenance.
//!
//! Both operators edit at most one block per call and keep the edited
//! individual's counters and fitness exact through the shared [`shift`]
//! primitive, so no full re-evaluation is ever needed during evolution.

use rand::Rng;

use crate::ga::individual::{random_gene, Individual};
use crate::problem::TimetableProblem;

#[derive(Clone, Copy)]
enum Shift {
    Assign,
    Unassign,
}

/// Single-triple edit primitive.
///
/// Adds the triple's current penalty back into the fitness (cancelling
/// what was previously subtracted for this counter state), applies the
/// ±1 delta to the triple's class/teacher/slot counters, then subtracts
/// the penalty under the new state. Both operators route every counter
/// change through here.
fn shift(problem: &TimetableProblem, individual: &mut Individual, idx: usize, direction: Shift) {
    individual.fitness += problem.triple_penalty(individual, idx);

    let encoding = &problem.encoding;
    let class = encoding.class_of(idx);
    let teacher = encoding.teacher_of(idx);
    let slot = encoding.hour_of(idx);
    match direction {
        Shift::Assign => {
            individual.class_occupancy[class] += 1;
            individual.teacher_load[teacher] += 1;
            individual.slot_occupancy[slot] += 1;
        }
        Shift::Unassign => {
            individual.class_occupancy[class] -= 1;
            individual.teacher_load[teacher] -= 1;
            individual.slot_occupancy[slot] -= 1;
        }
    }

    individual.fitness -= problem.triple_penalty(individual, idx);
}

/// Mutates one uniformly random block.
///
/// Unassigns the block's current triple (if any), then redraws the gene
/// uniformly from `{unassigned} ∪ {0..block_len}`. At most one block
/// changes; fitness stays exact.
pub fn mutate<R: Rng>(problem: &TimetableProblem, individual: &mut Individual, rng: &mut R) {
    let encoding = &problem.encoding;
    let block = rng.random_range(0..encoding.num_blocks());

    if let Some(idx) = individual.triple_index(encoding, block) {
        shift(problem, individual, idx, Shift::Unassign);
    }

    individual.assignment[block] = random_gene(encoding.block_len(block), rng);

    if let Some(idx) = individual.triple_index(encoding, block) {
        shift(problem, individual, idx, Shift::Assign);
    }
}

/// Exchanges one uniformly random block's gene between two individuals.
///
/// If both hold the same gene at the chosen block this is a no-op.
/// Otherwise each side's current triple is unassigned on its own
/// counters, the genes are swapped, and each side's received triple is
/// assigned. Exactly one block's value moves per call.
pub fn crossover<R: Rng>(
    problem: &TimetableProblem,
    first: &mut Individual,
    second: &mut Individual,
    rng: &mut R,
) {
    let encoding = &problem.encoding;
    let block = rng.random_range(0..encoding.num_blocks());

    if first.assignment[block] == second.assignment[block] {
        return;
    }

    if let Some(idx) = first.triple_index(encoding, block) {
        shift(problem, first, idx, Shift::Unassign);
    }
    if let Some(idx) = second.triple_index(encoding, block) {
        shift(problem, second, idx, Shift::Unassign);
    }

    let gene = first.assignment[block];
    first.assignment[block] = second.assignment[block];
    second.assignment[block] = gene;

    if let Some(idx) = first.triple_index(encoding, block) {
        shift(problem, first, idx, Shift::Assign);
    }
    if let Some(idx) = second.triple_index(encoding, block) {
        shift(problem, second, idx, Shift::Assign);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoadBounds, Restrictions, Teacher};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_problem() -> TimetableProblem {
        let teachers = vec![
            Teacher::new("T1").with_hours(vec![1, 2]).with_classes(vec![0, 1]),
            Teacher::new("T2").with_hours(vec![0, 1]).with_classes(vec![1]),
            Teacher::new("T3").with_hours(vec![0, 2]).with_classes(vec![0, 2]),
        ];
        let restrictions = Restrictions::new()
            .with_class_targets(vec![2, 2, 1])
            .with_teacher_loads(vec![
                LoadBounds::new(1, 2),
                LoadBounds::new(0, 2),
                LoadBounds::new(1, 3),
            ])
            .with_slot_capacities(vec![2, 2, 2]);
        TimetableProblem::new(&teachers, restrictions)
    }

    /// Asserts that the running fitness and counters agree with a full
    /// re-evaluation from the genes.
    fn assert_synced(problem: &TimetableProblem, individual: &Individual) {
        let mut oracle = individual.clone();
        problem.evaluate(&mut oracle);
        assert_eq!(individual.class_occupancy, oracle.class_occupancy);
        assert_eq!(individual.teacher_load, oracle.teacher_load);
        assert_eq!(individual.slot_occupancy, oracle.slot_occupancy);
        assert!(
            (individual.fitness - oracle.fitness).abs() < 1e-9,
            "incremental fitness {} drifted from recomputed {}",
            individual.fitness,
            oracle.fitness
        );
    }

    #[test]
    fn test_mutation_keeps_fitness_synced() {
        let problem = sample_problem();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut individual = Individual::random(&problem, &mut rng);
            assert_synced(&problem, &individual);

            for _ in 0..100 {
                mutate(&problem, &mut individual, &mut rng);
                assert_synced(&problem, &individual);
            }
        }
    }

    #[test]
    fn test_crossover_keeps_fitness_synced() {
        let problem = sample_problem();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut first = Individual::random(&problem, &mut rng);
            let mut second = Individual::random(&problem, &mut rng);

            for _ in 0..100 {
                crossover(&problem, &mut first, &mut second, &mut rng);
                assert_synced(&problem, &first);
                assert_synced(&problem, &second);
            }
        }
    }

    #[test]
    fn test_mutation_locality() {
        let problem = sample_problem();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut individual = Individual::random(&problem, &mut rng);

            for _ in 0..50 {
                let before = individual.assignment.clone();
                mutate(&problem, &mut individual, &mut rng);
                let changed = before
                    .iter()
                    .zip(&individual.assignment)
                    .filter(|(a, b)| a != b)
                    .count();
                assert!(changed <= 1, "mutation changed {changed} blocks");
            }
        }
    }

    #[test]
    fn test_crossover_exchanges_one_block() {
        let problem = sample_problem();
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut first = Individual::random(&problem, &mut rng);
            let mut second = Individual::random(&problem, &mut rng);
            let first_before = first.assignment.clone();
            let second_before = second.assignment.clone();

            crossover(&problem, &mut first, &mut second, &mut rng);

            let changed: Vec<usize> = (0..first.assignment.len())
                .filter(|&b| {
                    first.assignment[b] != first_before[b]
                        || second.assignment[b] != second_before[b]
                })
                .collect();
            assert!(changed.len() <= 1);
            if let Some(&b) = changed.first() {
                assert_eq!(first.assignment[b], second_before[b]);
                assert_eq!(second.assignment[b], first_before[b]);
            }
        }
    }

    #[test]
    fn test_crossover_noop_on_equal_genes() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut first = Individual::random(&problem, &mut rng);
        let mut second = first.clone();
        let snapshot = first.clone();

        for _ in 0..20 {
            crossover(&problem, &mut first, &mut second, &mut rng);
        }
        assert_eq!(first, snapshot);
        assert_eq!(second, snapshot);
    }

    #[test]
    fn test_mutation_redraw_can_unassign() {
        let problem = sample_problem();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut individual = Individual::random(&problem, &mut rng);

        // Across enough mutations the redraw must hit `None` at least once.
        let mut saw_unassigned = individual.assignment.iter().any(Option::is_none);
        for _ in 0..200 {
            mutate(&problem, &mut individual, &mut rng);
            saw_unassigned |= individual.assignment.iter().any(Option::is_none);
        }
        assert!(saw_unassigned);
    }
}
