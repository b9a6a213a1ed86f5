use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use attrkv_types::{AttributeType, AttributeValue};
use tracing::debug;

use crate::entry::Entry;
use crate::error::{StoreError, StoreResult};
use crate::traits::AttributeStore;

/// Entries and the type registry. Always guarded together.
#[derive(Default)]
struct State {
    entries: HashMap<String, Entry>,
    types: HashMap<String, AttributeType>,
}

/// In-memory, HashMap-based attribute store.
///
/// Entries and the attribute type registry share a single `RwLock`, so a
/// reader never sees an entry whose values disagree with the registry.
/// Entries are cloned on read.
pub struct InMemoryAttributeStore {
    state: RwLock<State>,
}

impl InMemoryAttributeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.read_state().entries.len()
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.read_state().entries.is_empty()
    }

    // A put validates everything before touching `State`, so a panic while
    // the lock is held cannot leave a half-applied write behind.
    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryAttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeStore for InMemoryAttributeStore {
    fn put(&self, key: &str, pairs: &[(String, String)]) -> StoreResult<()> {
        let mut state = self.write_state();

        let mut staged = Entry::new();
        let mut new_types: HashMap<&str, AttributeType> = HashMap::new();

        for (name, raw) in pairs {
            let value = AttributeValue::infer(raw);
            let found = value.attribute_type();
            let locked = state
                .types
                .get(name.as_str())
                .or_else(|| new_types.get(name.as_str()))
                .copied();

            match locked {
                Some(expected) if expected != found => {
                    debug!(key, attribute = %name, %expected, %found, "put rejected");
                    return Err(StoreError::DataType {
                        attribute: name.clone(),
                        expected,
                        found,
                    });
                }
                Some(_) => {}
                None => {
                    new_types.insert(name.as_str(), found);
                }
            }
            staged.insert(name.as_str(), value);
        }

        // Validation passed; publish the registry additions and the entry
        // together under the same guard.
        for (name, ty) in new_types {
            debug!(attribute = name, attribute_type = %ty, "attribute type locked");
            state.types.insert(name.to_owned(), ty);
        }
        debug!(key, attributes = staged.len(), "put");
        state.entries.insert(key.to_owned(), staged);
        Ok(())
    }

    fn get(&self, key: &str) -> Option<Entry> {
        self.read_state().entries.get(key).cloned()
    }

    fn delete(&self, key: &str) -> bool {
        let removed = self.write_state().entries.remove(key).is_some();
        debug!(key, removed, "delete");
        removed
    }

    fn search(&self, attribute: &str, raw_value: &str) -> Vec<String> {
        let wanted = AttributeValue::infer(raw_value);
        let state = self.read_state();
        let mut keys: Vec<String> = state
            .entries
            .iter()
            .filter(|(_, entry)| entry.get(attribute) == Some(&wanted))
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn keys(&self) -> Vec<String> {
        let state = self.read_state();
        let mut keys: Vec<String> = state.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn attribute_type(&self, attribute: &str) -> Option<AttributeType> {
        self.read_state().types.get(attribute).copied()
    }

    fn attribute_types(&self) -> Vec<(String, AttributeType)> {
        let state = self.read_state();
        let mut types: Vec<(String, AttributeType)> = state
            .types
            .iter()
            .map(|(name, ty)| (name.clone(), *ty))
            .collect();
        types.sort_by(|(a, _), (b, _)| a.cmp(b));
        types
    }

    fn contains_key(&self, key: &str) -> bool {
        self.read_state().entries.contains_key(key)
    }
}

impl std::fmt::Debug for InMemoryAttributeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("InMemoryAttributeStore")
            .field("key_count", &state.entries.len())
            .field("attribute_count", &state.types.len())
            .finish()
    }
}
