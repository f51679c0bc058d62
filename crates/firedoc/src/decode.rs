//! Wire envelope back to native values, the inverse of [`crate::encode`].
//!
//! Round-trips exactly for every variant except timestamps: a non-UTC
//! instant was already mislabelled as UTC during encoding, so it decodes to
//! a different instant. Nothing here can reconstruct an `Unsupported`
//! value; the encoder never emitted one.

use chrono::DateTime;

use crate::error::{Error, Result};
use crate::value::{Number, Value};
use crate::wire::{Document, TaggedValue};

pub fn decode_document(doc: &Document) -> Result<Vec<(String, Value)>> {
    let mut out = Vec::with_capacity(doc.fields.len());
    for (key, tagged) in &doc.fields {
        let value = decode_value(tagged).map_err(|e| rescope(e, key))?;
        out.push((key.clone(), value));
    }
    Ok(out)
}

pub fn decode_value(tagged: &TaggedValue) -> Result<Value> {
    match tagged {
        TaggedValue::NullValue(()) => Ok(Value::Null),
        TaggedValue::BooleanValue(b) => Ok(Value::Bool(*b)),
        TaggedValue::IntegerValue(digits) => parse_integer(digits),
        TaggedValue::DoubleValue(f) => Ok(Value::Number(Number::F64(*f))),
        TaggedValue::StringValue(s) => Ok(Value::String(s.clone())),
        TaggedValue::TimestampValue(s) => {
            let ts = DateTime::parse_from_rfc3339(s).map_err(|e| Error::Decode {
                field: String::new(),
                message: format!("bad timestamp `{}`: {}", s, e),
            })?;
            Ok(Value::Timestamp(ts))
        }
        TaggedValue::ArrayValue { values } => {
            let items = values.iter().map(decode_value).collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(items))
        }
        TaggedValue::MapValue(doc) => Ok(Value::Object(decode_document(doc)?)),
    }
}

fn parse_integer(digits: &str) -> Result<Value> {
    if let Ok(i) = digits.parse::<i64>() {
        return Ok(Value::Number(Number::I64(i)));
    }
    if let Ok(u) = digits.parse::<u64>() {
        return Ok(Value::Number(Number::U64(u)));
    }
    Err(Error::Decode {
        field: String::new(),
        message: format!("integer out of range or malformed: `{}`", digits),
    })
}

// Decode errors are raised below the field level; attach the field name on
// the way out so reports name the offending key.
fn rescope(e: Error, key: &str) -> Error {
    match e {
        Error::Decode { field, message } if field.is_empty() => Error::Decode {
            field: key.to_string(),
            message,
        },
        other => other,
    }
}
