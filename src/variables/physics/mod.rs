
//! Variable catalogs grouped by field of physics.

pub mod thermodynamics;
