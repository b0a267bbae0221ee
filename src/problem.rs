//! Problem compiler: flat candidate-triple encoding.
//!
//! Turns the teacher list into the arrays the search engine operates on.
//! Every (teacher, hour, class) combination where the teacher is available
//! and qualified becomes one candidate *triple*, identified by a global
//! index. Triples are grouped into contiguous *blocks*, one block per
//! (teacher, hour) pair, holding all candidate classes for that pair; an
//! individual chooses at most one triple per block.
//!
//! # Contract
//!
//! A compiled encoding has non-empty blocks, strictly increasing
//! `block_bounds`, and in-range class/hour/teacher indices. The engine
//! asserts [`TimetableProblem::is_consistent`] once at solve entry and
//! performs no bounds checks afterwards.

use serde::{Deserialize, Serialize};

use crate::models::{Restrictions, Teacher};

/// Flat candidate-triple arrays, indexed by global triple index.
///
/// `block_bounds` has one more entry than the number of blocks and
/// delimits block `b` as the half-open range
/// `block_bounds[b]..block_bounds[b + 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encoding {
    class_of: Vec<usize>,
    hour_of: Vec<usize>,
    teacher_of: Vec<usize>,
    block_bounds: Vec<usize>,
}

impl Encoding {
    /// Compiles the teacher list into flat triple arrays.
    ///
    /// Enumeration is per teacher, hour-major, class-minor: each of a
    /// teacher's available hours yields one block containing all of that
    /// teacher's assignable classes.
    pub fn compile(teachers: &[Teacher]) -> Self {
        let size: usize = teachers.iter().map(Teacher::candidate_count).sum();
        let mut class_of = Vec::with_capacity(size);
        let mut hour_of = Vec::with_capacity(size);
        let mut teacher_of = Vec::with_capacity(size);
        let mut block_bounds = vec![0];

        for (index, teacher) in teachers.iter().enumerate() {
            for &hour in &teacher.hours {
                for &class in &teacher.classes {
                    class_of.push(class);
                    hour_of.push(hour);
                    teacher_of.push(index);
                }
                block_bounds.push(class_of.len());
            }
        }

        Self {
            class_of,
            hour_of,
            teacher_of,
            block_bounds,
        }
    }

    /// Number of blocks (assignment-vector length).
    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.block_bounds.len() - 1
    }

    /// Total number of candidate triples.
    #[inline]
    pub fn num_triples(&self) -> usize {
        self.class_of.len()
    }

    /// First triple index of block `b`.
    #[inline]
    pub fn block_start(&self, b: usize) -> usize {
        self.block_bounds[b]
    }

    /// Number of candidate triples in block `b`.
    #[inline]
    pub fn block_len(&self, b: usize) -> usize {
        self.block_bounds[b + 1] - self.block_bounds[b]
    }

    /// Class of triple `idx`.
    #[inline]
    pub fn class_of(&self, idx: usize) -> usize {
        self.class_of[idx]
    }

    /// Hour slot of triple `idx`.
    #[inline]
    pub fn hour_of(&self, idx: usize) -> usize {
        self.hour_of[idx]
    }

    /// Teacher of triple `idx`.
    #[inline]
    pub fn teacher_of(&self, idx: usize) -> usize {
        self.teacher_of[idx]
    }

    /// The block prefix offsets, one more entry than `num_blocks`.
    pub fn block_bounds(&self) -> &[usize] {
        &self.block_bounds
    }
}

/// A compiled timetabling problem: encoding plus restriction targets.
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    /// Candidate-triple encoding.
    pub encoding: Encoding,
    /// Restriction targets and penalty weights.
    pub restrictions: Restrictions,
}

impl TimetableProblem {
    /// Compiles a problem from domain models.
    ///
    /// Run [`validate_input`](crate::validation::validate_input) first to
    /// get per-error diagnostics; this constructor trusts its input.
    pub fn new(teachers: &[Teacher], restrictions: Restrictions) -> Self {
        Self {
            encoding: Encoding::compile(teachers),
            restrictions,
        }
    }

    /// Creates a problem from an already-compiled encoding.
    pub fn from_parts(encoding: Encoding, restrictions: Restrictions) -> Self {
        Self {
            encoding,
            restrictions,
        }
    }

    /// Whether the encoding upholds the compiler contract against the
    /// restriction tables: strictly increasing block bounds starting at 0,
    /// parallel triple arrays, and in-range class/hour/teacher indices.
    pub fn is_consistent(&self) -> bool {
        let e = &self.encoding;
        let r = &self.restrictions;

        if e.block_bounds.len() < 2 {
            return false; // At least one block
        }
        if e.block_bounds.first() != Some(&0) || e.block_bounds.last() != Some(&e.num_triples()) {
            return false;
        }
        if e.block_bounds.windows(2).any(|w| w[0] >= w[1]) {
            return false;
        }
        if e.hour_of.len() != e.num_triples() || e.teacher_of.len() != e.num_triples() {
            return false;
        }

        e.class_of.iter().all(|&c| c < r.num_classes())
            && e.hour_of.iter().all(|&h| h < r.num_slots())
            && e.teacher_of.iter().all(|&t| t < r.num_teachers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoadBounds;

    fn sample_teachers() -> Vec<Teacher> {
        vec![
            Teacher::new("T1").with_hours(vec![1, 2]).with_classes(vec![0, 1]),
            Teacher::new("T2").with_hours(vec![0, 1]).with_classes(vec![1]),
        ]
    }

    fn sample_restrictions() -> Restrictions {
        Restrictions::new()
            .with_class_targets(vec![1, 1])
            .with_teacher_loads(vec![LoadBounds::new(0, 2), LoadBounds::new(0, 2)])
            .with_slot_capacities(vec![1, 1, 1])
    }

    #[test]
    fn test_compile_layout() {
        let encoding = Encoding::compile(&sample_teachers());

        // T1: blocks (T1,h1)=[c0,c1], (T1,h2)=[c0,c1]; T2: (T2,h0)=[c1], (T2,h1)=[c1]
        assert_eq!(encoding.num_blocks(), 4);
        assert_eq!(encoding.num_triples(), 6);
        assert_eq!(encoding.block_bounds(), &[0, 2, 4, 5, 6]);

        assert_eq!(encoding.class_of, vec![0, 1, 0, 1, 1, 1]);
        assert_eq!(encoding.hour_of, vec![1, 1, 2, 2, 0, 1]);
        assert_eq!(encoding.teacher_of, vec![0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_block_accessors() {
        let encoding = Encoding::compile(&sample_teachers());
        assert_eq!(encoding.block_start(0), 0);
        assert_eq!(encoding.block_len(0), 2);
        assert_eq!(encoding.block_start(2), 4);
        assert_eq!(encoding.block_len(2), 1);
        assert_eq!(encoding.block_start(3) + encoding.block_len(3), 6);
    }

    #[test]
    fn test_consistent_problem() {
        let problem = TimetableProblem::new(&sample_teachers(), sample_restrictions());
        assert!(problem.is_consistent());
    }

    #[test]
    fn test_inconsistent_restrictions() {
        // Too few class targets for the referenced class indices.
        let restrictions = sample_restrictions().with_class_targets(vec![1]);
        let problem = TimetableProblem::new(&sample_teachers(), restrictions);
        assert!(!problem.is_consistent());
    }

    #[test]
    fn test_inconsistent_bounds() {
        let mut encoding = Encoding::compile(&sample_teachers());
        encoding.block_bounds[1] = 0; // No longer strictly increasing
        let problem = TimetableProblem::from_parts(encoding, sample_restrictions());
        assert!(!problem.is_consistent());
    }

    #[test]
    fn test_candidate_count_matches_triples() {
        let teachers = sample_teachers();
        let encoding = Encoding::compile(&teachers);
        let expected: usize = teachers.iter().map(Teacher::candidate_count).sum();
        assert_eq!(encoding.num_triples(), expected);
    }
}
