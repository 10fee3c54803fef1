//! Versioned byte encoding of a cached value sequence.
//!
//! Layout is a JSON object `{"v": <version>, "items": [...]}`. The version is
//! checked before the items are touched, so a blob written by a different
//! schema is reported instead of being half-decoded.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::{Error, Result};

pub const SCHEMA_VERSION: u16 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    v: u16,
    items: &'a [T],
}

#[derive(Deserialize)]
struct Envelope {
    v: u16,
    items: serde_json::Value,
}

pub fn encode<T: Serialize>(items: &[T]) -> Result<Vec<u8>> {
    let envelope = EnvelopeRef {
        v: SCHEMA_VERSION,
        items,
    };
    Ok(serde_json::to_vec(&envelope)?)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    if envelope.v != SCHEMA_VERSION {
        return Err(Error::SchemaVersion {
            found: envelope.v,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(serde_json::from_value(envelope.items)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Order {
        id: u32,
        lines: Vec<String>,
    }

    #[test]
    fn test_preserves_order_and_contents() {
        let orders = vec![
            Order { id: 2, lines: vec!["b".into()] },
            Order { id: 1, lines: vec![] },
        ];
        let bytes = encode(&orders).unwrap();
        let decoded: Vec<Order> = decode(&bytes).unwrap();
        assert_eq!(decoded, orders);
    }

    #[test]
    fn test_envelope_carries_version() {
        let bytes = encode(&[1u8, 2, 3]).unwrap();
        let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(raw["v"], SCHEMA_VERSION);
        assert_eq!(raw["items"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_rejects_other_schema_version() {
        let bytes = br#"{"v":99,"items":[]}"#;
        let result = decode::<u8>(bytes);
        assert!(matches!(
            result,
            Err(Error::SchemaVersion { found: 99, expected: SCHEMA_VERSION })
        ));
    }

    #[test]
    fn test_garbage_is_serialization_error() {
        let result = decode::<u8>(b"\x00\x01not json");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_item_type_mismatch_is_serialization_error() {
        let bytes = encode(&["not", "numbers"]).unwrap();
        assert!(matches!(decode::<u32>(&bytes), Err(Error::Serialization(_))));
    }
}
