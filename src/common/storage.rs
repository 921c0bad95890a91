use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use tracing::info;

use crate::common::attributes::to_document;
use crate::common::errors::StorageError;
use crate::common::{Document, Item, ID_ATTRIBUTE, NAME_ATTRIBUTE};

/// Key-value table holding [`Item`]s keyed by `id`.
///
/// Every operation is unconditional: `put_item` overwrites, `update_name`
/// creates the record when it's missing and `delete_item` doesn't report
/// whether anything was removed.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn put_item(&self, item: &Item) -> Result<(), StorageError>;

    async fn get_item(&self, id: &str) -> Result<Option<Document>, StorageError>;

    /// Sets `name` on the record and returns all of its attributes afterwards.
    async fn update_name(&self, id: &str, name: &str) -> Result<Option<Document>, StorageError>;

    async fn delete_item(&self, id: &str) -> Result<(), StorageError>;
}

pub struct DynamoStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl ItemStore for DynamoStore {
    async fn put_item(&self, item: &Item) -> Result<(), StorageError> {
        info!("Putting item with id: {}", item.id);
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item.clone().into()))
            .send()
            .await
            .map_err(StorageError::sdk("put_item"))?;

        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<Option<Document>, StorageError> {
        info!("Getting item with id: {}", id);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, Self::key(id))
            .send()
            .await
            .map_err(StorageError::sdk("get_item"))?;

        output.item.map(to_document).transpose()
    }

    async fn update_name(&self, id: &str, name: &str) -> Result<Option<Document>, StorageError> {
        info!("Updating name of item with id: {}", id);
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, Self::key(id))
            .update_expression("SET #nm = :nm")
            .expression_attribute_names("#nm", NAME_ATTRIBUTE)
            .expression_attribute_values(":nm", AttributeValue::S(name.to_string()))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(StorageError::sdk("update_item"))?;

        output.attributes.map(to_document).transpose()
    }

    async fn delete_item(&self, id: &str) -> Result<(), StorageError> {
        info!("Deleting item with id: {}", id);
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, Self::key(id))
            .send()
            .await
            .map_err(StorageError::sdk("delete_item"))?;

        Ok(())
    }
}
