use lambda_http::http::StatusCode;
use lambda_http::{Error as LambdaError, Request, Response};
use serde::Serialize;
use tracing::info;

use crate::common::errors::Error;
use crate::common::storage::ItemStore;
use crate::common::utils::{extract_body, into_response, json_response, reject, string_field};
use crate::common::{Item, ID_ATTRIBUTE, NAME_ATTRIBUTE};

const OPERATION: &str = "creating item";

pub const INVALID_BODY_ERROR: &str = "Request body must contain \"id\" and \"name\"";
pub const CREATED_MESSAGE: &str = "Item created successfully";

#[derive(Debug, Serialize)]
struct Created<'a> {
    message: &'a str,
    item: &'a Item,
}

// Overwrites an existing record with the same id.
#[tracing::instrument(skip(store))]
pub async fn process_request<S: ItemStore>(
    request: Request,
    store: &S,
) -> Result<Response<String>, Error> {
    let body = extract_body(&request)?;
    let (Some(id), Some(name)) = (
        string_field(&body, ID_ATTRIBUTE),
        string_field(&body, NAME_ATTRIBUTE),
    ) else {
        return reject(StatusCode::BAD_REQUEST, INVALID_BODY_ERROR);
    };

    let item = Item { id, name };
    store.put_item(&item).await?;
    info!("Created item with id: {}", item.id);

    json_response(
        StatusCode::CREATED,
        &Created {
            message: CREATED_MESSAGE,
            item: &item,
        },
    )
}

pub async fn handle<S: ItemStore>(
    request: Request,
    store: &S,
) -> Result<Response<String>, LambdaError> {
    into_response(OPERATION, process_request(request, store).await)
}
