#![doc = include_str!("../README.md")]

pub mod error;
pub mod value;
pub mod wire;
pub mod encode;
pub mod decode;

pub use crate::decode::{decode_document, decode_value};
pub use crate::encode::{encode_document, encode_value};
pub use crate::error::{Error, Result};
pub use crate::value::{Number, Value};
pub use crate::wire::{Document, TaggedValue};

/// Converts a `serde_json` object into a field list ready for
/// [`encode_document`]. Anything other than a JSON object is an error.
pub fn fields_from_json(value: serde_json::Value) -> Result<Vec<(String, Value)>> {
    match value {
        serde_json::Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect()),
        other => Err(Error::Message(format!(
            "expected a JSON object for document fields, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
