//! Validation and update rules
//!
//! Field-level rules applied on every write path. [`validate_new`] guards
//! creation, [`apply_update`] merges a partial payload into a stored record.

pub mod rules;
pub mod validators;

pub use rules::{apply_update, is_valid, validate_new, validate_update};
