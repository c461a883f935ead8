//! # loam-types
//!
//! Unified type system and value coercion engine for Loam, a storage-agnostic
//! data mapper.
//!
//! This crate sits underneath the mapping layer and owns one job: converting
//! values between three representations while enforcing type compatibility.
//! It knows nothing about persistence, query languages, or transports; those
//! are collaborators on either side of it.
//!
//! ## The three representations
//!
//! ```text
//! external input  --cast-->  canonical value  --dump-->  storage-native value
//!                            canonical value  <--load--  storage-native value
//! ```
//!
//! - `cast` is the untrusted boundary: form and API input, with text
//!   coercions for integers, floats, booleans, and decimals
//! - `load`/`dump` are the trusted storage boundary: representations must
//!   already be exact, and only the calendar types change shape (chrono
//!   wrappers on the canonical side, component tuples on the storage side)
//!
//! ## Dispatch
//!
//! Every operation dispatches the same way over a [`FieldType`] descriptor:
//! built-in logic for scalars and arrays-of-scalars, wholesale delegation for
//! custom types. Arrays convert element-wise in order and fail fast. Null
//! passes through everything.
//!
//! ## Extension
//!
//! External code extends the engine by implementing the five-operation
//! [`CustomType`] capability set and wrapping it with [`FieldType::custom`].
//! The engine adds nothing around a delegate: its results, including
//! failures, propagate unchanged.
//!
//! ## Example Usage
//!
//! ```rust
//! use loam_types::{cast, is_blank, FieldType, ScalarType, Value};
//!
//! let age = FieldType::Scalar(ScalarType::Integer);
//!
//! let canonical = cast(&age, Value::String("34".into())).unwrap();
//! assert_eq!(canonical, Value::Integer(34));
//!
//! assert!(cast(&age, Value::String("34.5".into())).is_err());
//! assert!(is_blank(&age, &Value::Null));
//! ```
//!
//! The engine is stateless and purely functional; every operation is safe to
//! call from any number of threads with no synchronization.

pub mod conversions;
pub mod errors;
pub mod models;

// Re-export the full engine surface at the crate root
pub use conversions::{cast, cast_json, dump, is_blank, load, value_from_json, value_to_json};
pub use errors::{ConversionError, ConversionResult};
pub use models::datatypes::{CustomType, FieldType, ScalarType, WireFormat, WireFormatError};
pub use models::values::{DateParts, DateTimeParts, Decimal, TimeParts, Value, MAX_DECIMAL_SCALE};
