//! VialName value object.

use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for vial names.
///
/// This ensures that vial names are validated at construction time and
/// cannot be empty or whitespace-only. The name is kept exactly as given.
///
/// # Example
///
/// ```
/// use testing_vial::domain::VialName;
///
/// let name = VialName::new("Cart").unwrap();
/// assert_eq!(name.as_str(), "Cart");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct VialName(String);

impl VialName {
    /// Create a new VialName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyVialName` if the name is empty or
    /// consists only of whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !super::is_present(&name) {
            return Err(ValidationError::EmptyVialName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for VialName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for VialName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        VialName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for VialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for VialName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
