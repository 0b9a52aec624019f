//! An ordered collection of vials attached to one target.

use crate::domain::VialResult;
use crate::vial::Vial;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The vials attached to a single target.
///
/// Vials are kept in declaration order and never merged: attaching the
/// same vial twice leaves two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct VialList {
    vials: Vec<Vial>,
}

impl VialList {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the results of constructing several vials.
    ///
    /// # Errors
    ///
    /// Returns the first construction error encountered.
    pub fn try_from_iter<I>(results: I) -> VialResult<Self>
    where
        I: IntoIterator<Item = VialResult<Vial>>,
    {
        let vials = results.into_iter().collect::<VialResult<Vec<_>>>()?;
        Ok(Self { vials })
    }

    /// Append a vial.
    pub fn push(&mut self, vial: Vial) {
        self.vials.push(vial);
    }

    /// Append every vial of `other`, after the ones already present.
    pub fn extend(&mut self, other: VialList) {
        self.vials.extend(other.vials);
    }

    /// Iterate over the vials in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vial> {
        self.vials.iter()
    }

    pub fn len(&self) -> usize {
        self.vials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vials.is_empty()
    }

    pub fn contains(&self, vial: &Vial) -> bool {
        self.vials.contains(vial)
    }

    /// Number of entries equal to `vial`.
    pub fn count(&self, vial: &Vial) -> usize {
        self.vials.iter().filter(|v| *v == vial).count()
    }

    pub fn as_slice(&self) -> &[Vial] {
        &self.vials
    }
}

impl FromIterator<Vial> for VialList {
    fn from_iter<I: IntoIterator<Item = Vial>>(iter: I) -> Self {
        Self {
            vials: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for VialList {
    type Item = Vial;
    type IntoIter = std::vec::IntoIter<Vial>;

    fn into_iter(self) -> Self::IntoIter {
        self.vials.into_iter()
    }
}

impl<'a> IntoIterator for &'a VialList {
    type Item = &'a Vial;
    type IntoIter = std::slice::Iter<'a, Vial>;

    fn into_iter(self) -> Self::IntoIter {
        self.vials.iter()
    }
}
