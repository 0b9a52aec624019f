//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two required parts of a
//! vial tag: its vial name and its test type. These value objects validate
//! at construction time, so a blank name or test type can never be
//! represented in the system.

pub mod errors;
pub mod test_type;
pub mod vial_name;

pub use errors::{ValidationError, VialResult};
pub use test_type::TestType;
pub use vial_name::VialName;

/// Whether a required tag field carries any non-whitespace content.
pub(crate) fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
