/// All errors the fee engine can return.
///
/// `UnknownSuitType` is a caller bug (stale identifier), not a
/// user-input problem; the validation variants are recoverable and
/// surfaced to the caller verbatim. "No matching slab" is never an
/// error -- the slab algorithm extrapolates from the last slab.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeeError {
    /// Identifier not present in the suit-type table.
    #[error("unknown suit type: {id}")]
    UnknownSuitType { id: String },

    /// A required input field was not supplied.
    #[error("{field} is required")]
    MissingField { field: String },

    /// An input value failed validation (non-positive, non-finite, or
    /// above the Rs 1,000 crore cap).
    #[error("{field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Decimal result did not fit the target integer type.
    #[error("fee computation overflow: {0}")]
    Overflow(String),
}
