//! Attaching vials to test suites and test functions.
//!
//! Rust has no runtime attributes, so a suite type carries its vials
//! through trait impls. The [`tagged!`](crate::tagged) and
//! [`tagged_methods!`](crate::tagged_methods) macros generate those impls
//! from a declaration list; the vials themselves stay plain [`Vial`]
//! values.
//!
//! [`Vial`]: crate::Vial

pub mod tagged;
pub mod vial_list;

pub use tagged::{Tagged, TaggedMethods};
pub use vial_list::VialList;
