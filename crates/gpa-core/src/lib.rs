//! # gpa-core
//!
//! Grade bookkeeping and GPA computation for gpacert.
//!
//! - Letter grades and the grade-point table
//! - Simulated obtained marks with a pluggable random source
//! - Subject, student, and summary entities
//! - Entry validation for subjects and student identity
//! - The capacity-bounded subject registry and GPA calculator
//! - `Session`, which owns all of the above for one user
//! - The error taxonomy and CLI response types

pub mod calculator;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod grade_table;
pub mod marks;
pub mod registry;
pub mod responses;
pub mod session;
pub mod validation;

pub use errors::CoreError;
pub use session::Session;
