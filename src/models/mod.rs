//! Data model for the Loam type engine: type descriptors and runtime values.

pub mod datatypes;
pub mod values;

pub use datatypes::{CustomType, FieldType, ScalarType, WireFormat, WireFormatError};
pub use values::{DateParts, DateTimeParts, Decimal, TimeParts, Value};
