//! Population evolution loop.
//!
//! Each generation: tournament selection rebuilds the population, the
//! disjoint consecutive pairs `(2k, 2k+1)` undergo crossover concurrently,
//! then a carried-over mutation budget is spent sequentially. The loop
//! stops at the first zero-fitness individual or at the generation cap.
//!
//! # Disjoint index ownership
//!
//! The parallel phases never lock: selection tasks each write one output
//! slot while reading the immutable previous generation, and crossover
//! tasks each own exclusively the pair of individuals at their chunk.
//! Mutation draws a population-wide random individual per step and so
//! runs on the calling thread, after the crossover barrier.
//!
//! # Determinism
//!
//! The master RNG pre-draws one sub-seed per parallel task; each task
//! runs its own `SmallRng` sub-stream. A fixed [`GaConfig::seed`]
//! therefore reproduces a run exactly, independent of thread scheduling.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

use crate::ga::operators::{crossover, mutate};
use crate::ga::{GaConfig, Individual};
use crate::problem::TimetableProblem;

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A fully satisfying timetable was found (fitness 0).
    Converged,
    /// The generation cap was reached; the result is best-effort.
    Exhausted,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The best individual of the final population.
    pub best: Individual,
    /// Number of generations evolved.
    pub generations: u32,
    /// Whether the search converged or gave up.
    pub outcome: SolveOutcome,
    /// Best fitness per generation (including the initial population).
    pub history: Vec<f64>,
}

impl SolveResult {
    /// Whether a fully satisfying timetable was found.
    pub fn converged(&self) -> bool {
        self.outcome == SolveOutcome::Converged
    }
}

/// Genetic algorithm runner.
///
/// # Example
/// ```no_run
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::models::{Restrictions, Teacher};
/// use u_timetable::problem::TimetableProblem;
///
/// let teachers = vec![/* ... */];
/// let restrictions = Restrictions::new();
/// let problem = TimetableProblem::new(&teachers, restrictions);
/// let result = GaRunner::run(&problem, &GaConfig::default());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Evolves a population until convergence or the generation cap.
    ///
    /// # Panics
    /// Panics if the configuration is invalid or the problem encoding
    /// violates the compiler contract; a broken encoding would silently
    /// corrupt the occupancy counters, so it is rejected up front.
    pub fn run(problem: &TimetableProblem, config: &GaConfig) -> SolveResult {
        if let Err(message) = config.validate() {
            panic!("invalid GA configuration: {message}");
        }
        assert!(
            problem.is_consistent(),
            "malformed problem encoding: block bounds or restriction tables are inconsistent"
        );

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(problem, &mut rng))
            .collect();

        let budget_per_generation = problem.encoding.num_blocks() as f64
            * config.population_size as f64
            * config.mutation_rate;
        let mut mutation_budget = 0.0;

        let mut history = Vec::new();
        let mut generation = 0u32;

        let outcome = loop {
            let best_fitness = population[Self::best_index(&population)].fitness;
            history.push(best_fitness);

            // Penalties are integer deviations scaled by the weights, so a
            // fully satisfying timetable lands on exactly 0.0.
            if best_fitness == 0.0 {
                break SolveOutcome::Converged;
            }
            if generation >= config.max_generations {
                break SolveOutcome::Exhausted;
            }
            generation += 1;

            population = Self::select(&population, &mut rng);
            Self::crossover_pairs(problem, &mut population, config.crossover_rate, &mut rng);

            mutation_budget += budget_per_generation;
            while mutation_budget >= 1.0 {
                let target = rng.random_range(0..population.len());
                mutate(problem, &mut population[target], &mut rng);
                mutation_budget -= 1.0;
            }
        };

        let best = population[Self::best_index(&population)].clone();
        SolveResult {
            best,
            generations: generation,
            outcome,
            history,
        }
    }

    /// Tournament selection: one task per output slot.
    ///
    /// Each slot draws two individuals with replacement and keeps the one
    /// with strictly greater fitness (ties keep the first drawn). Tasks
    /// read the immutable previous generation and write only their own
    /// slot, so no synchronization is needed.
    fn select(population: &[Individual], rng: &mut SmallRng) -> Vec<Individual> {
        let seeds: Vec<u64> = (0..population.len()).map(|_| rng.next_u64()).collect();
        seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = SmallRng::seed_from_u64(seed);
                let first = rng.random_range(0..population.len());
                let second = rng.random_range(0..population.len());
                let winner = if population[second].fitness > population[first].fitness {
                    second
                } else {
                    first
                };
                population[winner].clone()
            })
            .collect()
    }

    /// Crossover phase: one task per disjoint consecutive pair.
    ///
    /// `par_chunks_exact_mut(2)` hands each task exclusive ownership of
    /// its pair; the call blocks until every pair is done. An odd
    /// trailing individual skips crossover for the generation.
    fn crossover_pairs(
        problem: &TimetableProblem,
        population: &mut [Individual],
        rate: f64,
        rng: &mut SmallRng,
    ) {
        let seeds: Vec<u64> = (0..population.len() / 2).map(|_| rng.next_u64()).collect();
        population
            .par_chunks_exact_mut(2)
            .zip(seeds.into_par_iter())
            .for_each(|(pair, seed)| {
                let mut rng = SmallRng::seed_from_u64(seed);
                if rng.random::<f64>() < rate {
                    let (first, second) = pair.split_at_mut(1);
                    crossover(problem, &mut first[0], &mut second[0], &mut rng);
                }
            });
    }

    /// Index of the fittest individual; ties keep the earliest.
    fn best_index(population: &[Individual]) -> usize {
        let mut best = 0;
        for (index, individual) in population.iter().enumerate().skip(1) {
            if individual.fitness > population[best].fitness {
                best = index;
            }
        }
        best
    }
}
