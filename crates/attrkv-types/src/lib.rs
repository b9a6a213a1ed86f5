//! Foundation types for attrkv.
//!
//! Every attribute stored in attrkv carries one of three value types. The
//! type of a raw token is inferred once, on input, and never changes after
//! that point.
//!
//! # Key Types
//!
//! - [`AttributeType`] — The type tag an attribute name is locked to
//! - [`AttributeValue`] — A typed value, inferred from a raw text token

pub mod value;

pub use value::{AttributeType, AttributeValue};
