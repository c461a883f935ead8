//! Element-wise conversion for array descriptors
//!
//! One combinator shared by `cast`, `load`, and `dump`. Elements convert in
//! input order; the first failure aborts the whole conversion and discards
//! partial results. Which index failed is deliberately not reported, matching
//! the engine's payload-free failure signal.

use crate::errors::ConversionResult;
use crate::models::values::Value;

/// Convert every element of `items` with `convert`, preserving order.
///
/// Returns `Ok` with a sequence of the same length iff every element
/// converts. An empty input yields an empty output.
pub(crate) fn convert_elements<F>(items: Vec<Value>, convert: F) -> ConversionResult<Vec<Value>>
where
    F: FnMut(Value) -> ConversionResult<Value>,
{
    // collect() on Result short-circuits at the first failing element.
    items.into_iter().map(convert).collect()
}
