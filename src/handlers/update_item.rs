use lambda_http::http::StatusCode;
use lambda_http::{Error as LambdaError, Request, Response};
use serde::Serialize;
use tracing::info;

use crate::common::errors::Error;
use crate::common::storage::ItemStore;
use crate::common::utils::{
    extract_body, extract_id, into_response, json_response, reject, string_field,
};
use crate::common::{Document, NAME_ATTRIBUTE};

const OPERATION: &str = "updating item";

pub const INVALID_BODY_ERROR: &str = "Request body must contain \"name\"";
pub const UPDATED_MESSAGE: &str = "Item updated successfully";

#[derive(Debug, Serialize)]
struct Updated<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<Document>,
}

/// Sets `name` on the record with the path `id`. There is no existence
/// check, so an unknown id ends up as a new record holding only `id` and
/// `name`.
#[tracing::instrument(skip(store))]
pub async fn process_request<S: ItemStore>(
    request: Request,
    store: &S,
) -> Result<Response<String>, Error> {
    let id = extract_id(&request)?;
    let body = extract_body(&request)?;
    let Some(name) = string_field(&body, NAME_ATTRIBUTE) else {
        return reject(StatusCode::BAD_REQUEST, INVALID_BODY_ERROR);
    };

    let item = store.update_name(&id, &name).await?;
    info!("Updated item with id: {}", id);

    json_response(
        StatusCode::OK,
        &Updated {
            message: UPDATED_MESSAGE,
            item,
        },
    )
}

pub async fn handle<S: ItemStore>(
    request: Request,
    store: &S,
) -> Result<Response<String>, LambdaError> {
    into_response(OPERATION, process_request(request, store).await)
}
