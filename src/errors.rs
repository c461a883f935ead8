//! Shared error types for the Loam type engine.
//!
//! Conversion failures are expected outcomes, not faults: a value that cannot
//! be cast to a column type is a validation problem for the caller to report.
//! The error therefore carries no payload and no context. Layers above this
//! crate (changeset validation, storage adapters) know which field and which
//! value were being converted and attach that context themselves.

use thiserror::Error;

/// Uniform failure signal for `cast`, `load`, and `dump`.
///
/// Custom type implementations return this same type, so a delegated failure
/// propagates through the engine unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value cannot be converted to the requested type")]
pub struct ConversionError;

/// Result type alias used across the conversion surface.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_payload_free_and_comparable() {
        let err = ConversionError;
        assert_eq!(err, ConversionError);
        assert_eq!(err.to_string(), "value cannot be converted to the requested type");
    }
}
