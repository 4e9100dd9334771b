//! Column transform engine.
//!
//! The engine interprets per-column operation tokens (`TRIM`, `CAST:INT`,
//! `LPAD:5|0`, ...) and applies them in order to one column of an in-memory
//! table. Validation operations report [`recast_model::QualityFinding`]s into
//! an accumulator owned by the caller; they never abort the run.
//!
//! - **op**: the operation vocabulary and token parsing
//! - **engine**: application of a parsed operation sequence to a column
//! - **numeric**: shared number parsing and rendering
//! - **datetime**: date parsing for `DT_TO_YYMMDD`

pub mod datetime;
pub mod engine;
pub mod numeric;
pub mod op;

pub use engine::{apply_ops, apply_op};
pub use op::{Op, OpParseError, parse_sequence};
