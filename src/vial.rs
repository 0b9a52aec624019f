//! The vial tag record.

use crate::domain::{TestType, ValidationError, VialName, VialResult};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One immutable attachment of a vial name, a test type and an optional
/// description to a test suite or test function.
///
/// Fields are private and no method takes `&mut self`: once built, a vial
/// never changes. [`Vial::with_description`] consumes the value under
/// construction and hands back the finished tag.
///
/// # Example
///
/// ```
/// use testing_vial::Vial;
///
/// let vial = Vial::new("Cart", "Unit")
///     .unwrap()
///     .with_description("Carts can have multiple products added");
///
/// assert_eq!(vial.vial_name(), "Cart");
/// assert_eq!(vial.test_type(), "Unit");
/// assert_eq!(vial.description(), Some("Carts can have multiple products added"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vial {
    /// The vial (category) this tag places the test in
    vial_name: VialName,

    /// The classification of the test, e.g. "Unit"
    test_type: TestType,

    /// Free-text explanation of what the tagged test covers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Vial {
    /// Create a new vial tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyVialName` or
    /// `ValidationError::EmptyTestType` if either value is empty or
    /// whitespace-only.
    pub fn new(vial_name: impl Into<String>, test_type: impl Into<String>) -> VialResult<Self> {
        let vial_name = vial_name.into();
        let test_type = test_type.into();

        let fields = VialName::new(vial_name.as_str())
            .and_then(|name| TestType::new(test_type.as_str()).map(|kind| (name, kind)));

        let (vial_name, test_type) = match fields {
            Ok(fields) => fields,
            Err(e) => {
                tracing::debug!(%vial_name, %test_type, error = %e, "rejected vial");
                return Err(e);
            }
        };

        tracing::trace!(vial_name = %vial_name, test_type = %test_type, "constructed vial");

        Ok(Self {
            vial_name,
            test_type,
            description: None,
        })
    }

    /// Attach a description while building the tag.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    /// The vial name, exactly as declared.
    pub fn vial_name(&self) -> &str {
        self.vial_name.as_str()
    }

    /// The test type label.
    pub fn test_type(&self) -> &str {
        self.test_type.as_str()
    }

    /// The description, if one was given.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Vial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.test_type, self.vial_name)?;
        if let Some(description) = &self.description {
            write!(f, " ({})", description)?;
        }
        Ok(())
    }
}

/// Wire shape of a vial before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VialRecord {
    vial_name: String,
    test_type: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<VialRecord> for Vial {
    type Error = ValidationError;

    fn try_from(record: VialRecord) -> Result<Self, Self::Error> {
        let vial = Vial::new(record.vial_name, record.test_type)?;
        Ok(match record.description {
            Some(description) => vial.with_description(description),
            None => vial,
        })
    }
}

// Serde support - deserialize through the validating constructor
impl<'de> Deserialize<'de> for Vial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = VialRecord::deserialize(deserializer)?;
        Vial::try_from(record).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vial_new_valid() {
        let vial = Vial::new("Product", "Integration").unwrap();
        assert_eq!(vial.vial_name(), "Product");
        assert_eq!(vial.test_type(), "Integration");
        assert_eq!(vial.description(), None);
    }

    #[test]
    fn test_vial_rejects_blank_name() {
        assert_eq!(Vial::new("", "Unit"), Err(ValidationError::EmptyVialName));
        assert_eq!(Vial::new("   ", "Unit"), Err(ValidationError::EmptyVialName));
    }

    #[test]
    fn test_vial_rejects_blank_test_type() {
        assert_eq!(Vial::new("Cart", ""), Err(ValidationError::EmptyTestType));
        assert_eq!(Vial::new("Cart", "\t"), Err(ValidationError::EmptyTestType));
    }

    #[test]
    fn test_vial_name_checked_first() {
        assert_eq!(Vial::new(" ", " "), Err(ValidationError::EmptyVialName));
    }

    #[test]
    fn test_with_description_keeps_identity() {
        let vial = Vial::new("Cart", "Unit").unwrap().with_description("x");
        assert_eq!(vial.vial_name(), "Cart");
        assert_eq!(vial.test_type(), "Unit");
        assert_eq!(vial.description(), Some("x"));
    }

    #[test]
    fn test_vial_display() {
        let vial = Vial::new("Cart", "Unit").unwrap();
        assert_eq!(vial.to_string(), "Unit:Cart");

        let vial = vial.with_description("adds products");
        assert_eq!(vial.to_string(), "Unit:Cart (adds products)");
    }

    #[test]
    fn test_vial_serialization_shape() {
        let vial = Vial::new("Cart", "Unit").unwrap();
        let json = serde_json::to_value(&vial).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "vialName": "Cart", "testType": "Unit" })
        );

        let vial = vial.with_description("x");
        let json = serde_json::to_value(&vial).unwrap();
        assert_eq!(json["description"], "x");
    }

    #[test]
    fn test_vial_deserialization() {
        let vial: Vial = serde_json::from_str(
            r#"{"vialName":"Product","testType":"Unit","description":"y"}"#,
        )
        .unwrap();
        assert_eq!(vial, Vial::new("Product", "Unit").unwrap().with_description("y"));
    }

    #[test]
    fn test_vial_deserialization_blank_fails() {
        let result: Result<Vial, _> =
            serde_json::from_str(r#"{"vialName":" ","testType":"Unit"}"#);
        assert!(result.is_err());

        let result: Result<Vial, _> =
            serde_json::from_str(r#"{"vialName":"Cart","testType":""}"#);
        assert!(result.is_err());
    }
}
