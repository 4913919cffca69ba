//! JSON encoding shared by every store implementation.
//!
//! Stores are written as a pretty-printed array with four-space indentation,
//! the layout of files produced by earlier versions of the tracker.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::traits::{StoreError, StoreId};

/// Parse a full store document
pub fn decode_records<T: DeserializeOwned>(store: StoreId, bytes: &[u8]) -> Result<Vec<T>, StoreError> {
    serde_json::from_slice(bytes).map_err(|source| StoreError::Corrupt { store, source })
}

/// Serialize a full store document
pub fn encode_records<T: Serialize>(store: StoreId, records: &[T]) -> Result<Vec<u8>, StoreError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Encode { store, source })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Donor;

    #[test]
    fn test_encode_uses_four_space_indent() {
        let donors = vec![Donor::new("Alice", "555-1234")];
        let bytes = encode_records(StoreId::Donors, &donors).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "[\n    {\n        \"name\": \"Alice\",\n        \"contact\": \"555-1234\"\n    }\n]"
        );
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let result: Result<Vec<Donor>, _> = decode_records(StoreId::Donors, br#"{"name": "Alice"}"#);
        assert!(matches!(
            result,
            Err(StoreError::Corrupt { store: StoreId::Donors, .. })
        ));

        let result: Result<Vec<Donor>, _> = decode_records(StoreId::Donors, br#"[{"name": "Alice"}]"#);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_decode_empty_array() {
        let donors: Vec<Donor> = decode_records(StoreId::Donors, b"[]").unwrap();
        assert!(donors.is_empty());
    }
}
