//! Type-locked attribute storage for attrkv.
//!
//! Each key maps to an [`Entry`]: a set of named, typed attributes. The first
//! time an attribute name is stored anywhere, its [`AttributeType`] is locked
//! for the lifetime of the store.
//!
//! # Storage Backends
//!
//! All backends implement the [`AttributeStore`] trait:
//!
//! - [`InMemoryAttributeStore`] -- `HashMap`-based store behind one `RwLock`
//!
//! # Design Rules
//!
//! 1. Puts replace the whole entry for a key. They never merge.
//! 2. A put is all-or-nothing: on a type conflict neither the entry nor the
//!    type registry changes.
//! 3. Type locks survive deletes.
//! 4. Enumeration (`keys`, `search`) is sorted ascending by key.
//! 5. Reads run concurrently; writes exclude everything else.
//!
//! [`AttributeType`]: attrkv_types::AttributeType

pub mod entry;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use entry::Entry;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryAttributeStore;
pub use traits::AttributeStore;
