//! Traits carrying suite-level and function-level vials.

use super::vial_list::VialList;
use crate::domain::VialResult;

/// A test suite type carrying vials.
///
/// Vials declared on a suite are visible on every suite that names it as
/// its base, in addition to the vials that suite declares itself.
pub trait Tagged {
    /// Vials declared directly on this suite.
    fn declared_vials() -> VialResult<VialList>;

    /// Vials visible through this suite's base, if it has one.
    fn inherited_vials() -> VialResult<VialList> {
        Ok(VialList::new())
    }

    /// Every vial visible on this suite: inherited first, then declared.
    fn vials() -> VialResult<VialList> {
        let mut vials = Self::inherited_vials()?;
        vials.extend(Self::declared_vials()?);
        Ok(vials)
    }
}

/// A test suite type carrying vials on individual test functions.
///
/// Function vials stay with the function they were declared on; they are
/// not shared with other functions nor with derived suites.
pub trait TaggedMethods {
    /// Vials declared on `method`. Unknown methods carry none.
    fn method_vials(method: &str) -> VialResult<VialList>;
}

/// Implement [`Tagged`] for a suite type.
///
/// The vial expressions are evaluated each time the generated functions
/// run, not when the macro expands: a blank name compiles, and its
/// `ValidationError` is returned by `declared_vials()` and `vials()`.
///
/// ```
/// use testing_vial::{tagged, Tagged, TestVial, UnitTestVial};
///
/// testing_vial::nameable!(CartVial => "Cart");
///
/// struct CartServiceTests;
/// struct DiscountedCartTests;
///
/// tagged!(CartServiceTests => [
///     UnitTestVial::of::<CartVial>().map(|v| v.with_description("Carts accept products")),
/// ]);
/// tagged!(DiscountedCartTests: CartServiceTests => [
///     UnitTestVial::named("Discount"),
/// ]);
///
/// let vials = DiscountedCartTests::vials().unwrap();
/// assert_eq!(vials.len(), 2);
/// ```
#[macro_export]
macro_rules! tagged {
    ($target:ty => [$($vial:expr),* $(,)?]) => {
        impl $crate::Tagged for $target {
            fn declared_vials() -> $crate::VialResult<$crate::VialList> {
                $crate::VialList::try_from_iter($crate::__vial_results![$($vial),*])
            }
        }
    };
    ($target:ty : $base:ty => [$($vial:expr),* $(,)?]) => {
        impl $crate::Tagged for $target {
            fn declared_vials() -> $crate::VialResult<$crate::VialList> {
                $crate::VialList::try_from_iter($crate::__vial_results![$($vial),*])
            }

            fn inherited_vials() -> $crate::VialResult<$crate::VialList> {
                <$base as $crate::Tagged>::vials()
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __vial_results {
    ($($vial:expr),*) => {{
        let results: ::std::vec::Vec<$crate::VialResult<$crate::Vial>> = ::std::vec![$($vial),*];
        results
    }};
}

/// Implement [`TaggedMethods`] for a suite type.
///
/// A method listed more than once carries the vials of every entry.
///
/// ```
/// use testing_vial::{tagged_methods, IntegrationTestVial, TaggedMethods, TestVial, UnitTestVial};
///
/// struct CartServiceTests;
///
/// tagged_methods!(CartServiceTests {
///     "add_to_cart_with_multiple_quantity" => [
///         UnitTestVial::named("Cart"),
///         UnitTestVial::named("Product"),
///     ],
///     "checkout" => [IntegrationTestVial::named("Payment")],
/// });
///
/// assert_eq!(CartServiceTests::method_vials("add_to_cart_with_multiple_quantity").unwrap().len(), 2);
/// assert!(CartServiceTests::method_vials("unknown").unwrap().is_empty());
/// ```
#[macro_export]
macro_rules! tagged_methods {
    ($target:ty { $($method:literal => [$($vial:expr),* $(,)?]),* $(,)? }) => {
        impl $crate::TaggedMethods for $target {
            #[allow(unused_mut, unused_variables)]
            fn method_vials(method: &str) -> $crate::VialResult<$crate::VialList> {
                let mut vials = $crate::VialList::new();
                $(
                    if method == $method {
                        vials.extend($crate::VialList::try_from_iter($crate::__vial_results![$($vial),*])?);
                    }
                )*
                Ok(vials)
            }
        }
    };
}
