//! Wire format encoding/decoding for FieldType
//!
//! Provides compact binary serialization with tag bytes for type
//! identification. Format: [tag byte][element tag for ARRAY].
//!
//! Custom descriptors are handles to in-process implementations and have no
//! wire identity; encoding one is an error.

use std::io::{Read, Write};

use thiserror::Error;

use crate::models::datatypes::{FieldType, ScalarType};

/// Tag byte marking an array descriptor; the element's scalar tag follows.
const ARRAY_TAG: u8 = 0x10;

#[derive(Error, Debug)]
pub enum WireFormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid type tag: {0:#x}")]
    InvalidTag(u8),

    #[error("Custom type descriptors have no wire format")]
    CustomNotEncodable,

    #[error("Unexpected end of data")]
    UnexpectedEof,
}

/// Trait for types that can be serialized to wire format
pub trait WireFormat: Sized {
    /// Encode this type to wire format
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), WireFormatError>;

    /// Decode this type from wire format
    fn decode<R: Read>(reader: &mut R) -> Result<Self, WireFormatError>;

    /// Encoded size in bytes
    fn encoded_size(&self) -> usize;
}

impl WireFormat for FieldType {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), WireFormatError> {
        match self {
            FieldType::Scalar(scalar) => writer.write_all(&[scalar.tag()])?,
            FieldType::Array(elem) => writer.write_all(&[ARRAY_TAG, elem.tag()])?,
            FieldType::Custom(_) => return Err(WireFormatError::CustomNotEncodable),
        }

        Ok(())
    }

    fn decode<R: Read>(reader: &mut R) -> Result<Self, WireFormatError> {
        let mut tag_buf = [0u8; 1];
        reader.read_exact(&mut tag_buf)?;
        let tag = tag_buf[0];

        if tag == ARRAY_TAG {
            let mut elem_buf = [0u8; 1];
            reader
                .read_exact(&mut elem_buf)
                .map_err(|_| WireFormatError::UnexpectedEof)?;

            let elem = ScalarType::from_tag(elem_buf[0])
                .ok_or(WireFormatError::InvalidTag(elem_buf[0]))?;
            Ok(FieldType::Array(elem))
        } else {
            ScalarType::from_tag(tag)
                .map(FieldType::Scalar)
                .ok_or(WireFormatError::InvalidTag(tag))
        }
    }

    fn encoded_size(&self) -> usize {
        match self {
            FieldType::Scalar(_) => 1,
            FieldType::Array(_) => 2, // array tag + element tag
            FieldType::Custom(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConversionResult;
    use crate::models::datatypes::CustomType;
    use crate::models::values::Value;
    use std::io::Cursor;

    #[test]
    fn test_scalar_round_trip() {
        let descriptors = vec![
            FieldType::Scalar(ScalarType::Any),
            FieldType::Scalar(ScalarType::Integer),
            FieldType::Scalar(ScalarType::Float),
            FieldType::Scalar(ScalarType::Boolean),
            FieldType::Scalar(ScalarType::String),
            FieldType::Scalar(ScalarType::Binary),
            FieldType::Scalar(ScalarType::Uuid),
            FieldType::Scalar(ScalarType::Decimal),
            FieldType::Scalar(ScalarType::DateTime),
            FieldType::Scalar(ScalarType::Time),
            FieldType::Scalar(ScalarType::Date),
        ];

        for original in descriptors {
            let mut buffer = Vec::new();
            original.encode(&mut buffer).unwrap();
            assert_eq!(buffer.len(), original.encoded_size());

            let mut cursor = Cursor::new(buffer);
            let decoded = FieldType::decode(&mut cursor).unwrap();

            assert_eq!(original, decoded);
        }
    }

    #[test]
    fn test_array_round_trip() {
        let original = FieldType::Array(ScalarType::Decimal);
        let mut buffer = Vec::new();
        original.encode(&mut buffer).unwrap();

        assert_eq!(buffer.len(), 2);

        let mut cursor = Cursor::new(buffer);
        let decoded = FieldType::decode(&mut cursor).unwrap();

        assert_eq!(original, decoded);
    }

    #[test]
    fn test_invalid_tag() {
        let buffer = vec![0xFF];
        let mut cursor = Cursor::new(buffer);
        assert!(matches!(
            FieldType::decode(&mut cursor),
            Err(WireFormatError::InvalidTag(0xFF))
        ));
    }

    #[test]
    fn test_truncated_array_descriptor() {
        let buffer = vec![super::ARRAY_TAG];
        let mut cursor = Cursor::new(buffer);
        assert!(matches!(
            FieldType::decode(&mut cursor),
            Err(WireFormatError::UnexpectedEof)
        ));
    }

    #[derive(Debug)]
    struct Opaque;

    impl CustomType for Opaque {
        fn backing(&self) -> ScalarType {
            ScalarType::String
        }

        fn is_blank(&self, _value: &Value) -> bool {
            false
        }

        fn cast(&self, value: Value) -> ConversionResult<Value> {
            Ok(value)
        }

        fn load(&self, value: Value) -> ConversionResult<Value> {
            Ok(value)
        }

        fn dump(&self, value: Value) -> ConversionResult<Value> {
            Ok(value)
        }
    }

    #[test]
    fn test_custom_descriptor_is_not_encodable() {
        let custom = FieldType::custom(Opaque);
        let mut buffer = Vec::new();
        assert!(matches!(
            custom.encode(&mut buffer),
            Err(WireFormatError::CustomNotEncodable)
        ));
        assert!(buffer.is_empty());
    }
}
