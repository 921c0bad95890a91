use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;

pub mod attributes;
pub mod config;
pub mod errors;
pub mod storage;
pub mod utils;

pub const TABLE_NAME_ENV: &str = "DYNAMO_TABLE";
pub const TABLE_NAME_DEFAULT: &str = "";

pub const ID_ATTRIBUTE: &str = "id";
pub const NAME_ATTRIBUTE: &str = "name";

/// Records read back from the table, attribute names mapped to JSON values.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// The single record kept in the table. `id` is the partition key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: String,
    pub name: String,
}

impl From<Item> for HashMap<String, AttributeValue> {
    fn from(item: Item) -> Self {
        HashMap::from([
            (ID_ATTRIBUTE.to_string(), AttributeValue::S(item.id)),
            (NAME_ATTRIBUTE.to_string(), AttributeValue::S(item.name)),
        ])
    }
}
