use lambda_http::http::StatusCode;
use lambda_http::{Error as LambdaError, Request, Response};

use crate::common::errors::Error;
use crate::common::storage::ItemStore;
use crate::common::utils::{extract_id, into_response, json_response, message_response};

const OPERATION: &str = "retrieving item";

pub const NOT_FOUND_ERROR: &str = "Item not found";

/// Responds with the stored record itself, no envelope around it.
#[tracing::instrument(skip(store))]
pub async fn process_request<S: ItemStore>(
    request: Request,
    store: &S,
) -> Result<Response<String>, Error> {
    let id = extract_id(&request)?;

    match store.get_item(&id).await? {
        Some(document) => json_response(StatusCode::OK, &document),
        None => message_response(StatusCode::NOT_FOUND, NOT_FOUND_ERROR),
    }
}

pub async fn handle<S: ItemStore>(
    request: Request,
    store: &S,
) -> Result<Response<String>, LambdaError> {
    into_response(OPERATION, process_request(request, store).await)
}
