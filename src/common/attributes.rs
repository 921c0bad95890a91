//! Conversion of DynamoDB attribute maps into plain JSON documents.
//!
//! Anything stored as a string, number, boolean, null, list, map, string set
//! or number set round-trips to the caller. Binary attributes have no JSON
//! form and are reported as [`StorageError::UnsupportedAttribute`].

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use crate::common::errors::StorageError;
use crate::common::Document;

pub fn to_document(
    attributes: HashMap<String, AttributeValue>,
) -> Result<Document, StorageError> {
    attributes
        .into_iter()
        .map(|(name, value)| {
            let value = to_json(&name, value)?;
            Ok((name, value))
        })
        .collect()
}

fn to_json(name: &str, value: AttributeValue) -> Result<Value, StorageError> {
    let value = match value {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => number(n),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(list) => Value::Array(
            list.into_iter()
                .map(|value| to_json(name, value))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(to_document(map)?),
        AttributeValue::Ss(set) => Value::Array(set.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(set.into_iter().map(number).collect()),
        _ => return Err(StorageError::UnsupportedAttribute(name.to_string())),
    };

    Ok(value)
}

// DynamoDB numbers carry up to 38 digits; keep the original text when JSON can't.
fn number(n: String) -> Value {
    match n.parse::<Number>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(n),
    }
}
