//! Timetabling framework for the U-Engine ecosystem.
//!
//! Searches for a feasible class/teacher/hour timetable with a genetic
//! algorithm. The engine encodes a timetable as one gene per
//! (teacher, hour) block and maintains fitness incrementally through every
//! edit, so mutation and crossover cost O(1) instead of a full
//! re-evaluation.
//!
//! # Modules
//!
//! - **`models`**: Input domain types — `Teacher`, `Restrictions`,
//!   `LoadBounds` — and the decoded solution — `Timetable`, `Assignment`,
//!   `Violation`
//! - **`problem`**: Compiles teachers into the flat candidate-triple
//!   encoding the engine searches over
//! - **`validation`**: Input integrity checks (duplicate hours, index
//!   ranges, restriction table sizes)
//! - **`ga`**: The search engine — individual encoding, incremental
//!   fitness, genetic operators, evolution loop
//!
//! # References
//!
//! - Colorni, Dorigo & Maniezzo (1990), "Genetic Algorithms and Highly
//!   Constrained Problems: The Time-Table Case"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"

pub mod ga;
pub mod models;
pub mod problem;
pub mod validation;
