//! Timetabling domain models.
//!
//! Provides the input types consumed by the problem compiler and the
//! decoded solution returned to callers.
//!
//! | Type | Role |
//! |------|------|
//! | `Teacher` | Availability and teaching qualifications |
//! | `Restrictions` | Occupancy targets, load bounds, slot capacities, weights |
//! | `Timetable` | Decoded solution with assignments and violations |

mod restrictions;
mod teacher;
mod timetable;

pub use restrictions::{LoadBounds, Restrictions};
pub use teacher::Teacher;
pub use timetable::{Assignment, Timetable, Violation, ViolationKind};
