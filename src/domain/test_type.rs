//! TestType value object.

use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The classification of a tagged test, such as "Unit" or "Integration".
///
/// The set of classifications is open: any non-blank label is accepted
/// here, and the fixed labels live with the kinds that use them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct TestType(String);

impl TestType {
    /// Label used by unit test vials.
    pub const UNIT: &'static str = "Unit";

    /// Label used by integration test vials.
    pub const INTEGRATION: &'static str = "Integration";

    /// Create a new TestType, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTestType` if the label is empty or
    /// consists only of whitespace.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        if !super::is_present(&label) {
            return Err(ValidationError::EmptyTestType);
        }
        Ok(Self(label))
    }

    /// Get the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for TestType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TestType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TestType::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for TestType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TestType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(TestType::new(TestType::UNIT).unwrap(), "Unit");
        assert_eq!(TestType::new(TestType::INTEGRATION).unwrap(), "Integration");
    }

    #[test]
    fn test_open_labels_accepted() {
        let smoke = TestType::new("Smoke").unwrap();
        assert_eq!(smoke.as_str(), "Smoke");
    }

    #[test]
    fn test_test_type_rejects_blank() {
        assert_eq!(TestType::new(""), Err(ValidationError::EmptyTestType));
        assert_eq!(TestType::new("  \t"), Err(ValidationError::EmptyTestType));
    }

    #[test]
    fn test_test_type_deserialization() {
        let parsed: TestType = serde_json::from_str("\"Unit\"").unwrap();
        assert_eq!(parsed, "Unit");
        assert!(serde_json::from_str::<TestType>("\"\"").is_err());
    }
}
