use lambda_http::http::StatusCode;
use lambda_http::{Error as LambdaError, Request, Response};
use tracing::info;

use crate::common::errors::Error;
use crate::common::storage::ItemStore;
use crate::common::utils::{extract_id, into_response, message_response};

const OPERATION: &str = "deleting item";

pub const DELETED_MESSAGE: &str = "Item deleted successfully";

// Reports success whether or not the record existed.
#[tracing::instrument(skip(store))]
pub async fn process_request<S: ItemStore>(
    request: Request,
    store: &S,
) -> Result<Response<String>, Error> {
    let id = extract_id(&request)?;

    store.delete_item(&id).await?;
    info!("Deleted item with id: {}", id);

    message_response(StatusCode::OK, DELETED_MESSAGE)
}

pub async fn handle<S: ItemStore>(
    request: Request,
    store: &S,
) -> Result<Response<String>, LambdaError> {
    into_response(OPERATION, process_request(request, store).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::storage::mock::{Call, MockStore};
    use crate::common::utils::test_support::{message, request};
    use crate::common::utils::{INTERNAL_SERVER_ERROR, MISSING_ID_ERROR};
    use serde_json::json;

    #[tokio::test]
    async fn missing_id_is_rejected() {
        let store = MockStore::new();

        let response = handle(request(None, None), &store).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(&response), MISSING_ID_ERROR);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn deletes_item() {
        let store = MockStore::new().with_document(json!({"id": "123", "name": "Test Item"}));

        let response = handle(request(None, Some("123")), &store).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(message(&response), DELETED_MESSAGE);
        assert_eq!(store.calls(), vec![Call::Delete("123".into())]);
        assert!(store.document("123").is_none());
    }

    #[tokio::test]
    async fn repeated_delete_still_succeeds() {
        let store = MockStore::new();

        for _ in 0..2 {
            let response = handle(request(None, Some("123")), &store).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        assert_eq!(store.calls().len(), 2);
    }

    #[tokio::test]
    async fn storage_failure_is_internal_error() {
        let store = MockStore::failing();

        let response = handle(request(None, Some("123")), &store).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message(&response), INTERNAL_SERVER_ERROR);
    }
}
