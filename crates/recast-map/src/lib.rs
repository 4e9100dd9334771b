//! Mapping projector.
//!
//! Takes the caller's table and the configured mapping entries, runs the
//! transform engine over each referenced source column, then selects and
//! renames the touched columns into the output table.

mod project;

pub use project::{Projection, project};
