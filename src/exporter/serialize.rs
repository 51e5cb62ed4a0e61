//! Pure BSON-to-JSON conversion for export
//!
//! Every document leaving the database passes through [`serialize_document`]
//! before being written or displayed. The conversion is total: JSON-native
//! values pass through unchanged, and the BSON-only types are rendered as
//! JSON-representable equivalents. The source document is never mutated;
//! a fresh `serde_json::Value` is built from it.
//!
//! Conversions:
//! - `_id` field: rendered as its string form, whatever its BSON type
//! - ObjectId: hex string
//! - DateTime: ISO 8601 / RFC 3339 string
//! - Decimal128: number when representable, string otherwise
//! - Binary: base64 string
//! - Regex: `/pattern/options` string
//! - Timestamp: milliseconds since the epoch

use bson::{Binary, Bson, DateTime, Document};
use serde_json::Value as JsonValue;

/// Convert a BSON document to a JSON-serializable value
///
/// The unique identifier field `_id` is rendered as a string; every other
/// field is converted with [`bson_to_json`].
///
/// # Arguments
/// * `doc` - Document to convert
///
/// # Returns
/// * `JsonValue` - Always a JSON object
pub fn serialize_document(doc: &Document) -> JsonValue {
    let mut map = serde_json::Map::new();

    for (key, value) in doc.iter() {
        let converted = if key == "_id" {
            JsonValue::String(id_string(value))
        } else {
            bson_to_json(value)
        };
        map.insert(key.clone(), converted);
    }

    JsonValue::Object(map)
}

/// Convert a single BSON value to JSON
///
/// # Arguments
/// * `value` - BSON value to convert
///
/// # Returns
/// * `JsonValue` - JSON equivalent
pub fn bson_to_json(value: &Bson) -> JsonValue {
    match value {
        Bson::String(s) => JsonValue::String(s.clone()),
        Bson::Int32(n) => JsonValue::Number((*n).into()),
        Bson::Int64(n) => JsonValue::Number((*n).into()),
        Bson::Double(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Bson::Boolean(b) => JsonValue::Bool(*b),
        Bson::Null => JsonValue::Null,
        Bson::ObjectId(oid) => JsonValue::String(oid.to_string()),
        Bson::DateTime(dt) => JsonValue::String(datetime_to_iso_string(dt)),
        Bson::Decimal128(d) => {
            let s = d.to_string();
            s.parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::String(s))
        }
        Bson::Array(arr) => JsonValue::Array(arr.iter().map(bson_to_json).collect()),
        Bson::Document(doc) => {
            let mut map = serde_json::Map::new();
            for (key, value) in doc.iter() {
                map.insert(key.clone(), bson_to_json(value));
            }
            JsonValue::Object(map)
        }
        Bson::Binary(bin) => JsonValue::String(binary_to_base64(bin)),
        Bson::RegularExpression(regex) => {
            JsonValue::String(format!("/{}/{}", regex.pattern, regex.options))
        }
        Bson::Timestamp(ts) => {
            let millis = (ts.time as i64) * 1000 + (ts.increment as i64);
            JsonValue::Number(millis.into())
        }
        Bson::Undefined => JsonValue::Null,
        Bson::MinKey => JsonValue::String("MinKey".to_string()),
        Bson::MaxKey => JsonValue::String("MaxKey".to_string()),
        _ => JsonValue::String(format!("{:?}", value)),
    }
}

/// Render an identifier value as a string
///
/// # Arguments
/// * `value` - The `_id` value, of whatever BSON type the source used
///
/// # Returns
/// * `String` - Textual representation
fn id_string(value: &Bson) -> String {
    match value {
        Bson::ObjectId(oid) => oid.to_string(),
        Bson::String(s) => s.clone(),
        other => match bson_to_json(other) {
            JsonValue::String(s) => s,
            json => json.to_string(),
        },
    }
}

/// Convert DateTime to ISO 8601 string
///
/// # Arguments
/// * `dt` - BSON DateTime value
///
/// # Returns
/// ISO 8601 formatted string or timestamp fallback
fn datetime_to_iso_string(dt: &DateTime) -> String {
    dt.try_to_rfc3339_string()
        .unwrap_or_else(|_| format!("{}", dt.timestamp_millis()))
}

/// Convert Binary data to Base64 string
///
/// # Arguments
/// * `bin` - BSON Binary value
///
/// # Returns
/// Base64 encoded string
fn binary_to_base64(bin: &Binary) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(&bin.bytes)
}
