//! Native value to wire envelope conversion.
//!
//! Encoding is total over the [`Value`] variants and purely functional.
//! The one deliberate gap: [`Value::Unsupported`] produces no tagged value
//! at all, so the owning field is omitted from the document.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::value::{Number, Value};
use crate::wire::{Document, TaggedValue};

/// Encodes a field list into a wire document. Fields whose value cannot be
/// represented on the wire are dropped, not rejected.
pub fn encode_document(fields: &[(String, Value)]) -> Document {
    let mut out = BTreeMap::new();
    for (key, value) in fields {
        if let Some(tagged) = encode_value(value) {
            out.insert(key.clone(), tagged);
        }
    }
    Document { fields: out }
}

/// Encodes one value, returning `None` for the unsupported variant.
pub fn encode_value(value: &Value) -> Option<TaggedValue> {
    match value {
        Value::Null => Some(TaggedValue::NullValue(())),
        Value::Bool(b) => Some(TaggedValue::BooleanValue(*b)),
        Value::Number(Number::F64(f)) => Some(TaggedValue::DoubleValue(*f)),
        // Integer halves render through Number's Display: the exact base-10
        // digit string, no sign normalization, no grouping.
        Value::Number(n) => Some(TaggedValue::IntegerValue(n.to_string())),
        Value::String(s) => Some(TaggedValue::StringValue(s.clone())),
        Value::Array(items) => Some(TaggedValue::ArrayValue {
            // Unsupported elements vanish from the array, mirroring the
            // field-level drop.
            values: items.iter().filter_map(encode_value).collect(),
        }),
        Value::Object(fields) => Some(TaggedValue::MapValue(encode_document(fields))),
        Value::Timestamp(ts) => Some(TaggedValue::TimestampValue(format_timestamp(ts))),
        Value::Unsupported => None,
    }
}

/// Formats an instant for the wire: the wall-clock reading at the value's
/// own offset, suffixed with `Z`.
///
/// Known-lossy: a non-UTC timestamp keeps its local reading but gets
/// labelled UTC, shifting the instant by the discarded offset. Callers that
/// care must convert to UTC before constructing the value.
///
/// The fraction is always six digits, where the seeding script this
/// replaces omitted it entirely when microseconds were zero. Both spellings
/// parse to the same instant on the receiving side.
fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    format!("{}Z", ts.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f"))
}
