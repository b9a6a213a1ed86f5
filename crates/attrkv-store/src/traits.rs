use attrkv_types::AttributeType;

use crate::entry::Entry;
use crate::error::StoreResult;

/// Typed attribute store.
///
/// All implementations must satisfy these invariants:
/// - Type lock: once an attribute name has been stored with a type, every
///   later value stored under that name, for any key, has the same type.
/// - `put` is atomic. On error neither the entry map nor the type registry
///   is modified.
/// - The entry map and the type registry are never observable in a mutually
///   inconsistent state.
/// - `keys` and `search` return keys sorted ascending.
pub trait AttributeStore: Send + Sync {
    /// Replace the entry for `key` with the given `(name, raw value)` pairs.
    ///
    /// Raw values are classified with [`AttributeValue::infer`]. When a name
    /// appears more than once, the last pair wins; every pair is still
    /// type-checked.
    ///
    /// Returns [`StoreError::DataType`] if any pair conflicts with a locked
    /// type.
    ///
    /// [`AttributeValue::infer`]: attrkv_types::AttributeValue::infer
    /// [`StoreError::DataType`]: crate::StoreError::DataType
    fn put(&self, key: &str, pairs: &[(String, String)]) -> StoreResult<()>;

    /// Read the entry for `key`. Returns `None` if the key is absent.
    fn get(&self, key: &str) -> Option<Entry>;

    /// Remove the entry for `key`. Returns `true` if it existed.
    ///
    /// Type locks are kept.
    fn delete(&self, key: &str) -> bool;

    /// Keys whose entry holds `attribute` equal to the value inferred from
    /// `raw_value`.
    ///
    /// The query value's type is inferred independently of the attribute's
    /// lock, so a query of the wrong type simply matches nothing.
    fn search(&self, attribute: &str, raw_value: &str) -> Vec<String>;

    /// All keys, sorted ascending.
    fn keys(&self) -> Vec<String>;

    /// The type `attribute` is locked to, if it has ever been stored.
    fn attribute_type(&self, attribute: &str) -> Option<AttributeType>;

    /// Every locked attribute with its type, sorted by name.
    fn attribute_types(&self) -> Vec<(String, AttributeType)>;

    /// Returns `true` if `key` has an entry.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
