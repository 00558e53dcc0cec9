use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use validation_core::policy::ValidationPolicy;
use validation_lambda::handlers::respond::{misconfiguration_response, ApiGatewayResponse};
use validation_lambda::handlers::validate::handle_validate_event;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    let policy = match ValidationPolicy::from_env() {
        Ok(value) => value,
        Err(error) => return Ok(misconfiguration_response(error.message())),
    };

    Ok(handle_validate_event(event.payload, &policy))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
