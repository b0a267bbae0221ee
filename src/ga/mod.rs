//! GA-based timetable search.
//!
//! # Encoding
//!
//! An [`Individual`] holds one gene per (teacher, hour) block: `None` for
//! "no class this hour" or the block-relative index of the chosen class.
//! Three occupancy counters (class, teacher, hour slot) are derived from
//! the genes and kept in lockstep with a running fitness through every
//! operator edit, so the evolution loop never re-evaluates from scratch.
//!
//! # Submodules
//!
//! - [`GaConfig`]: loop parameters with builder and validation
//! - [`mutate`] / [`crossover`]: incremental-fitness genetic operators
//! - [`GaRunner`]: tournament selection, parallel phases, termination
//!
//! # Reference
//! - Colorni, Dorigo & Maniezzo (1990), "Genetic Algorithms and Highly
//!   Constrained Problems: The Time-Table Case"

mod config;
mod evolution;
mod fitness;
mod individual;
mod operators;

pub use config::GaConfig;
pub use evolution::{GaRunner, SolveOutcome, SolveResult};
pub use individual::Individual;
pub use operators::{crossover, mutate};
