use aws_config::BehaviorVersion;
use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};

use item_lambdas::common::config::{init_tracing, Config};
use item_lambdas::common::storage::DynamoStore;
use item_lambdas::handlers::delete_item::handle;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let config = Config::from_env();
    init_tracing(config.log_level);

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamo_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = DynamoStore::new(dynamo_client, config.table_name);

    run(service_fn(|request: LambdaRequest| handle(request, &store))).await
}
