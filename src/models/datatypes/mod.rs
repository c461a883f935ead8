//! Type descriptors for the Loam type engine
//!
//! This module owns the descriptor model every engine operation dispatches
//! over:
//!
//! - **`ScalarType`**: the closed enumeration of built-in scalar types
//! - **`FieldType`**: a descriptor, one of scalar, array-of-scalar, or a
//!   handle to a [`CustomType`] implementation
//! - **`CustomType`**: the five-operation capability set external types
//!   implement to extend the engine without modifying it
//! - **`WireFormat`**: compact tag-byte serialization for primitive
//!   descriptors
//!
//! Descriptors are immutable values; the engine keeps no registry and no
//! mutable state.

pub mod custom;
pub mod field_type;
pub mod wire_format;

pub use custom::CustomType;
pub use field_type::{FieldType, ScalarType};
pub use wire_format::{WireFormat, WireFormatError};
