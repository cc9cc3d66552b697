//! Module: model
//! Responsibility: caller-supplied field metadata and its registry.
//! Does not own: schema loading or field-level value handling.

pub mod field;


pub use field::{DataType, Field, FieldRegistry};
