use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use validation_lambda::handlers::hello::handle_hello_event;
use validation_lambda::handlers::respond::ApiGatewayResponse;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_hello_event(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
