use bytes::Bytes;

/// Converts between a typed value and the raw bytes stored in an attribute.
///
/// A codec is a type-level choice, never instantiated: the accessor is
/// generic over it and calls these associated functions directly. Both
/// directions report failure as `None` rather than an error. A `None` from
/// [`decode`](Codec::decode) means the bytes are present but not a valid
/// `Value`; a `None` from [`encode`](Codec::encode) means the value cannot
/// be represented and nothing should be written.
///
/// New value types are added by implementing this trait; the accessor does
/// not need to change.
pub trait Codec {
    /// The typed form of an attribute value.
    type Value;

    /// Parse a stored value.
    fn decode(bytes: &[u8]) -> Option<Self::Value>;

    /// Serialize a value for storage.
    fn encode(value: &Self::Value) -> Option<Bytes>;
}

/// Passthrough codec: the value is the stored bytes, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Codec for Raw {
    type Value = Vec<u8>;

    fn decode(bytes: &[u8]) -> Option<Vec<u8>> {
        Some(bytes.to_vec())
    }

    fn encode(value: &Vec<u8>) -> Option<Bytes> {
        Some(Bytes::copy_from_slice(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_is_identity() {
        let data = vec![0u8, 1, 2, 0xff, 0];
        assert_eq!(Raw::decode(&data), Some(data.clone()));
        assert_eq!(Raw::encode(&data).unwrap().as_ref(), data.as_slice());
    }

    #[test]
    fn raw_accepts_empty() {
        assert_eq!(Raw::decode(&[]), Some(Vec::new()));
        assert!(Raw::encode(&Vec::new()).unwrap().is_empty());
    }
}
