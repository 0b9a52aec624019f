//! Testing Vial - declarative vial and test-type tags for Rust test suites.
//!
//! A vial is a named category of tests. Suites and individual test
//! functions carry [`Vial`] tags that pair a vial name with a test type
//! ("Unit", "Integration", ...) and an optional description, so a
//! discovery or reporting tool can group tests without reading their
//! bodies.
//!
//! # Architecture
//!
//! - **nameable**: the [`Nameable`] contract for naming a vial by type
//! - **domain**: validated value objects and [`ValidationError`]
//! - **vial**: the immutable [`Vial`] tag
//! - **kinds**: [`UnitTestVial`] and [`IntegrationTestVial`]
//! - **attachment**: [`VialList`], [`Tagged`] and [`TaggedMethods`]
//! - **schema**: JSON schema of the tag shape
//! - **config** / **logging**: diagnostics setup
//!
//! # Example
//!
//! ```
//! use testing_vial::{tagged, Tagged, TestVial, UnitTestVial};
//!
//! testing_vial::nameable!(pub CartVial => "Cart");
//!
//! struct CartServiceTests;
//!
//! tagged!(CartServiceTests => [
//!     UnitTestVial::of::<CartVial>().map(|v| v.with_description("x")),
//!     UnitTestVial::named("Product").map(|v| v.with_description("y")),
//! ]);
//!
//! let vials = CartServiceTests::vials().unwrap();
//! assert_eq!(vials.as_slice()[0].vial_name(), "Cart");
//! assert!(UnitTestVial::named("").is_err());
//! ```

pub mod attachment;
pub mod config;
pub mod domain;
pub mod error;
pub mod kinds;
pub mod logging;
pub mod nameable;
pub mod schema;
pub mod vial;

pub use attachment::{Tagged, TaggedMethods, VialList};
pub use config::Config;
pub use domain::{TestType, ValidationError, VialName, VialResult};
pub use error::{ConfigError, ConfigResult};
pub use kinds::{IntegrationTestVial, TestVial, UnitTestVial};
pub use nameable::Nameable;
pub use vial::Vial;
