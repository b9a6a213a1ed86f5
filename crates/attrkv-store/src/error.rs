use attrkv_types::AttributeType;

/// Errors from attribute store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A put supplied a value whose type contradicts the attribute's lock.
    #[error("data type error: attribute `{attribute}` is {expected}, got {found}")]
    DataType {
        attribute: String,
        expected: AttributeType,
        found: AttributeType,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
