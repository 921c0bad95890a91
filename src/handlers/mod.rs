//! One module per lambda. Each exposes `process_request`, which runs the
//! validate, store, respond sequence, and `handle`, which wraps it in the
//! shared error boundary for `lambda_http::run`.

pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod update_item;
