//! The tagged-value envelope understood by the Firestore REST write API.
//!
//! Serialization of these types produces exactly the JSON the endpoint
//! expects: a document is `{"fields": {<name>: <tagged value>, ...}}` and
//! each tagged value is a single-key wrapper naming its type, e.g.
//! `{"integerValue": "42"}` or `{"arrayValue": {"values": [...]}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A document body: field name to tagged value. Field order is irrelevant
/// on the wire, so a sorted map keeps output deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub fields: BTreeMap<String, TaggedValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaggedValue {
    NullValue(()),
    BooleanValue(bool),
    /// Integers travel as their base-10 digit string so values beyond the
    /// receiver's 53-bit safe range survive intact.
    IntegerValue(String),
    DoubleValue(f64),
    StringValue(String),
    /// ISO-8601 wall-clock reading with a trailing `Z`.
    TimestampValue(String),
    ArrayValue { values: Vec<TaggedValue> },
    MapValue(Document),
}
