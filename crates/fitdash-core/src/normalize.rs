//! Response payload normalization.
//!
//! The API answers a collection GET in one of two shapes: a bare JSON array,
//! or a paginated envelope holding the array under [`COLLECTION_KEY`].
//! [`normalize`] reduces both to one canonical value and [`records_of`] turns
//! that value into the row sequence a view stores. Both functions are total
//! over every JSON shape; malformed payloads degrade to an empty table and
//! never to an error. Only the fetch/parse step that precedes them can fail.

use serde_json::Value;

/// Field name a paginated envelope stores its collection under.
pub const COLLECTION_KEY: &str = "results";

/// One resource instance as received from the server.
///
/// Records are kept opaque: a mapping from field name to whatever scalar the
/// server sent. Field presence is not validated here; absent fields are
/// resolved at render time by per-column fallbacks.
pub type Record = Value;

/// Reduce a raw response payload to the canonical collection value.
///
/// The sequence check comes first: an array is returned unchanged. An object
/// is then probed for [`COLLECTION_KEY`] and, when the key is present, its
/// value is returned without checking that it is itself a list. Any other
/// payload passes through untouched.
pub fn normalize(payload: Value) -> Value {
    if payload.is_array() {
        return payload;
    }
    match payload {
        Value::Object(mut map) => match map.remove(COLLECTION_KEY) {
            Some(collection) => collection,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Extract the record sequence a view stores from a normalized value.
///
/// An array yields its members, whatever shape each member has. Every other
/// value yields the empty sequence, so a degenerate payload renders as an
/// empty table.
pub fn records_of(normalized: Value) -> Vec<Record> {
    match normalized {
        Value::Array(records) => records,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── normalize ─────────────────────────────────────────────────────────────

    #[test]
    fn test_array_payload_is_identity() {
        let payload = json!([{"id": 1, "name": "Alpha"}, {"id": 2, "name": "Beta"}]);
        assert_eq!(normalize(payload.clone()), payload);
    }

    #[test]
    fn test_empty_array_is_identity() {
        assert_eq!(normalize(json!([])), json!([]));
    }

    #[test]
    fn test_envelope_yields_inner_collection() {
        let payload = json!({"results": [{"id": 1}], "count": 1, "next": null});
        assert_eq!(normalize(payload), json!([{"id": 1}]));
    }

    #[test]
    fn test_envelope_extraction_ignores_other_keys() {
        let payload = json!({
            "count": 3,
            "next": "http://localhost:8000/api/users/?page=2",
            "previous": null,
            "results": [{"id": 1}, {"id": 2}]
        });
        assert_eq!(normalize(payload), json!([{"id": 1}, {"id": 2}]));
    }

    /// The envelope value is returned even when it is not a list; the shape
    /// is not validated at this layer.
    #[test]
    fn test_envelope_with_non_list_value_passes_through() {
        let payload = json!({"results": "oops"});
        assert_eq!(normalize(payload), json!("oops"));
    }

    #[test]
    fn test_object_without_collection_key_passes_through() {
        let payload = json!({"detail": "not found"});
        assert_eq!(normalize(payload.clone()), payload);
    }

    #[test]
    fn test_scalar_payloads_pass_through() {
        assert_eq!(normalize(json!("plain")), json!("plain"));
        assert_eq!(normalize(json!(42)), json!(42));
        assert_eq!(normalize(json!(null)), json!(null));
        assert_eq!(normalize(json!(true)), json!(true));
    }

    /// Array check wins over the envelope probe: an array stays an array even
    /// if its members happen to carry a `results` field.
    #[test]
    fn test_sequence_check_precedes_envelope_probe() {
        let payload = json!([{"results": [1, 2, 3]}]);
        assert_eq!(normalize(payload.clone()), payload);
    }

    // ── records_of ────────────────────────────────────────────────────────────

    #[test]
    fn test_records_of_array_yields_members() {
        let records = records_of(json!([{"id": 1}, {"id": 2}]));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], json!({"id": 1}));
    }

    #[test]
    fn test_records_of_tolerates_non_object_members() {
        let records = records_of(json!([1, "two", null]));
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_records_of_non_array_is_empty() {
        assert!(records_of(json!({"detail": "nope"})).is_empty());
        assert!(records_of(json!("oops")).is_empty());
        assert!(records_of(json!(null)).is_empty());
    }
}
