use std::collections::HashMap;

use attrkv_types::AttributeValue;
use serde::{Serialize, Serializer};

/// The full set of attributes stored under one key.
///
/// Iteration order of [`Entry::iter`] is unspecified. Use [`Entry::sorted`]
/// when output must be deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entry {
    attributes: HashMap<String, AttributeValue>,
}

impl Entry {
    /// Create an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: AttributeValue,
    ) -> Option<AttributeValue> {
        self.attributes.insert(name.into(), value)
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All attributes sorted ascending by name.
    pub fn sorted(&self) -> Vec<(&str, &AttributeValue)> {
        let mut attrs: Vec<_> = self.iter().collect();
        attrs.sort_by(|(a, _), (b, _)| a.cmp(b));
        attrs
    }
}

impl FromIterator<(String, AttributeValue)> for Entry {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

/// Serializes as a JSON object with keys in ascending order.
impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted())
    }
}
