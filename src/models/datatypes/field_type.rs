//! FieldType - unified type descriptors for Loam columns and parameters
//!
//! A descriptor is exactly one of three shapes: a scalar built-in, an array of
//! a scalar built-in, or a handle to an external [`CustomType`] implementation.
//! Classification between the three is a plain tag match; the engine never
//! inspects a custom type beyond its five-operation capability set.
//!
//! Each scalar has a deterministic wire tag byte for binary serialization:
//! - ANY = 0x01 (wildcard for matching)
//! - INTEGER = 0x02 (64-bit signed integer)
//! - FLOAT = 0x03 (64-bit floating point)
//! - BOOLEAN = 0x04
//! - STRING = 0x05 (UTF-8 string)
//! - BINARY = 0x06 (raw bytes)
//! - UUID = 0x07
//! - DECIMAL = 0x08 (scaled 128-bit integer)
//! - DATETIME = 0x09
//! - TIME = 0x0A
//! - DATE = 0x0B
//!
//! Array descriptors are tagged 0x10 followed by the element's scalar tag.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::datatypes::custom::CustomType;

/// The closed set of built-in scalar types.
///
/// Extending this enumeration means changing the engine itself; open-ended
/// extension goes through [`CustomType`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// Wildcard type that matches and passes through everything (0x01)
    Any,

    /// 64-bit signed integer (0x02)
    Integer,

    /// 64-bit floating point (0x03)
    Float,

    /// Boolean (0x04)
    Boolean,

    /// UTF-8 string (0x05)
    String,

    /// Raw bytes (0x06)
    Binary,

    /// UUID (0x07)
    Uuid,

    /// Arbitrary-precision decimal, stored as a scaled integer (0x08)
    Decimal,

    /// Calendar date and time of day (0x09)
    DateTime,

    /// Time of day (0x0A)
    Time,

    /// Calendar date (0x0B)
    Date,
}

impl ScalarType {
    /// Get the wire format tag byte for this scalar.
    pub fn tag(&self) -> u8 {
        match self {
            ScalarType::Any => 0x01,
            ScalarType::Integer => 0x02,
            ScalarType::Float => 0x03,
            ScalarType::Boolean => 0x04,
            ScalarType::String => 0x05,
            ScalarType::Binary => 0x06,
            ScalarType::Uuid => 0x07,
            ScalarType::Decimal => 0x08,
            ScalarType::DateTime => 0x09,
            ScalarType::Time => 0x0A,
            ScalarType::Date => 0x0B,
        }
    }

    /// Create a ScalarType from a wire format tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(ScalarType::Any),
            0x02 => Some(ScalarType::Integer),
            0x03 => Some(ScalarType::Float),
            0x04 => Some(ScalarType::Boolean),
            0x05 => Some(ScalarType::String),
            0x06 => Some(ScalarType::Binary),
            0x07 => Some(ScalarType::Uuid),
            0x08 => Some(ScalarType::Decimal),
            0x09 => Some(ScalarType::DateTime),
            0x0A => Some(ScalarType::Time),
            0x0B => Some(ScalarType::Date),
            _ => None,
        }
    }

    /// Get the schema-facing name for this scalar.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Any => "any",
            ScalarType::Integer => "integer",
            ScalarType::Float => "float",
            ScalarType::Boolean => "boolean",
            ScalarType::String => "string",
            ScalarType::Binary => "binary",
            ScalarType::Uuid => "uuid",
            ScalarType::Decimal => "decimal",
            ScalarType::DateTime => "datetime",
            ScalarType::Time => "time",
            ScalarType::Date => "date",
        }
    }

    /// Resolve a schema-facing name back to a ScalarType.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "any" => Some(ScalarType::Any),
            "integer" => Some(ScalarType::Integer),
            "float" => Some(ScalarType::Float),
            "boolean" => Some(ScalarType::Boolean),
            "string" => Some(ScalarType::String),
            "binary" => Some(ScalarType::Binary),
            "uuid" => Some(ScalarType::Uuid),
            "decimal" => Some(ScalarType::Decimal),
            "datetime" => Some(ScalarType::DateTime),
            "time" => Some(ScalarType::Time),
            "date" => Some(ScalarType::Date),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A type descriptor for a column, parameter, or cast target.
///
/// Descriptors are stateless values constructed at schema-declaration and
/// query-construction sites. The engine owns no registry of them.
///
/// # Example
///
/// ```rust,ignore
/// use loam_types::{FieldType, ScalarType};
///
/// let id_type = FieldType::Scalar(ScalarType::Integer);
/// let tags_type = FieldType::Array(ScalarType::String);
///
/// assert!(id_type.is_primitive());
/// assert!(tags_type.matches(&FieldType::Array(ScalarType::String)));
/// ```
#[derive(Debug, Clone)]
pub enum FieldType {
    /// A built-in scalar type.
    Scalar(ScalarType),

    /// A homogeneous array of a built-in scalar type. Arrays nest one level
    /// deep; the element is always a scalar, never another array or a custom
    /// type.
    Array(ScalarType),

    /// A handle to an external type implementing [`CustomType`].
    Custom(Arc<dyn CustomType>),
}

impl FieldType {
    /// Wrap a [`CustomType`] implementation in a descriptor.
    pub fn custom<T: CustomType + 'static>(ty: T) -> Self {
        FieldType::Custom(Arc::new(ty))
    }

    /// True iff this descriptor is handled by the engine's built-in logic.
    ///
    /// Scalars and arrays are primitive; classification of an array is an
    /// outer-shape test only. Custom descriptors delegate every operation to
    /// their implementation instead.
    pub fn is_primitive(&self) -> bool {
        matches!(self, FieldType::Scalar(_) | FieldType::Array(_))
    }

    /// Type compatibility check against an expected primitive descriptor.
    ///
    /// Used by schema and query validation to decide whether a value declared
    /// as `self` may be supplied where `expected` is required. `expected` must
    /// be primitive; the result is unspecified otherwise.
    ///
    /// `any` on either side matches unconditionally. A custom descriptor is
    /// resolved to its backing scalar first, then compared structurally like
    /// any other primitive. Matching is total; there is no error path.
    pub fn matches(&self, expected: &FieldType) -> bool {
        match (self, expected) {
            (FieldType::Scalar(ScalarType::Any), _) | (_, FieldType::Scalar(ScalarType::Any)) => {
                true
            }
            (FieldType::Custom(custom), _) => {
                FieldType::Scalar(custom.backing()).matches(expected)
            }
            (FieldType::Array(actual), FieldType::Array(expected)) => {
                FieldType::Scalar(*actual).matches(&FieldType::Scalar(*expected))
            }
            (FieldType::Scalar(actual), FieldType::Scalar(expected)) => actual == expected,
            _ => false,
        }
    }
}

impl From<ScalarType> for FieldType {
    fn from(scalar: ScalarType) -> Self {
        FieldType::Scalar(scalar)
    }
}

impl PartialEq for FieldType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldType::Scalar(a), FieldType::Scalar(b)) => a == b,
            (FieldType::Array(a), FieldType::Array(b)) => a == b,
            // Custom descriptors compare by handle identity.
            (FieldType::Custom(a), FieldType::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(scalar) => write!(f, "{}", scalar.name()),
            FieldType::Array(elem) => write!(f, "array<{}>", elem.name()),
            FieldType::Custom(custom) => write!(f, "custom({})", custom.backing().name()),
        }
    }
}
