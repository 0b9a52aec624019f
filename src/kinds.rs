//! Test-type specializations of [`Vial`].
//!
//! Each kind fixes the test type and offers two ways to name the vial: a
//! [`Nameable`] type, or a string literal. Both routes go through
//! [`Vial::new`], so they validate identically and produce equal tags
//! whenever the literal matches the type's name.

use crate::domain::{TestType, ValidationError, VialResult};
use crate::nameable::{resolve_name, Nameable};
use crate::vial::Vial;

/// A classification of tests with its own fixed test type.
///
/// Adding a classification means adding a unit struct and one impl:
///
/// ```
/// use testing_vial::TestVial;
///
/// pub struct SmokeTestVial;
///
/// impl TestVial for SmokeTestVial {
///     const TEST_TYPE: &'static str = "Smoke";
/// }
///
/// let vial = SmokeTestVial::named("Checkout").unwrap();
/// assert_eq!(vial.test_type(), "Smoke");
/// ```
pub trait TestVial {
    /// The test type every vial of this kind carries.
    const TEST_TYPE: &'static str;

    /// Build a vial whose name is given as a literal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyVialName` for a blank name.
    fn named(name: impl Into<String>) -> VialResult<Vial> {
        Vial::new(name, Self::TEST_TYPE)
    }

    /// Build a vial whose name is resolved from the [`Nameable`] type `T`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnresolvedIdentity` if `T` resolves to a
    /// blank name.
    fn of<T: Nameable>() -> VialResult<Vial> {
        Vial::new(resolve_name::<T>(), Self::TEST_TYPE).map_err(|e| match e {
            ValidationError::EmptyVialName => ValidationError::UnresolvedIdentity {
                type_name: std::any::type_name::<T>(),
            },
            other => other,
        })
    }
}

/// Vials for unit tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitTestVial;

impl TestVial for UnitTestVial {
    const TEST_TYPE: &'static str = TestType::UNIT;
}

/// Vials for integration tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegrationTestVial;

impl TestVial for IntegrationTestVial {
    const TEST_TYPE: &'static str = TestType::INTEGRATION;
}
