//! HR dashboard data layer
//!
//! Typed records for employees, departments, leave requests and attendance,
//! the column sets each dashboard page hands to the table engine, and the
//! aggregates behind the summary cards.

pub mod columns;
pub mod error;
pub mod model;
pub mod summary;

pub use error::ModelError;
