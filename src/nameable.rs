//! The `Nameable` contract: a vial identity carried by a type.
//!
//! Declaring a vial as a type lets many tag sites share one name without
//! repeating (or mistyping) the literal.

/// A default-constructible type exposing a stable vial name.
///
/// # Example
///
/// ```
/// use testing_vial::Nameable;
///
/// #[derive(Default)]
/// struct CartVial;
///
/// impl Nameable for CartVial {
///     fn name(&self) -> &str {
///         "Cart"
///     }
/// }
///
/// assert_eq!(testing_vial::nameable::resolve_name::<CartVial>(), "Cart");
/// ```
pub trait Nameable: Default {
    /// The vial name this type stands for.
    fn name(&self) -> &str;
}

/// Resolve the vial name of `T` by default-constructing it once.
pub fn resolve_name<T: Nameable>() -> String {
    let instance = T::default();
    let name = instance.name().to_owned();
    tracing::trace!(
        vial_type = std::any::type_name::<T>(),
        vial_name = %name,
        "resolved vial name"
    );
    name
}

/// Declare a unit struct implementing [`Nameable`] with a constant name.
///
/// ```
/// testing_vial::nameable!(
///     /// Vial for shopping-cart behaviour.
///     pub CartVial => "Cart"
/// );
///
/// use testing_vial::Nameable;
/// assert_eq!(CartVial.name(), "Cart");
/// ```
#[macro_export]
macro_rules! nameable {
    ($(#[$meta:meta])* $vis:vis $ty:ident => $name:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $ty;

        impl $crate::Nameable for $ty {
            fn name(&self) -> &str {
                $name
            }
        }
    };
}
