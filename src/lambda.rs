use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use lead_relay::relay::gateway::{ProxyRequest, ProxyResponse};
use lead_relay::utils::{logger, validation::Validate};
use lead_relay::{LeadRelayHandler, RelayConfig, ResendProvider};

async fn function_handler(
    event: LambdaEvent<ProxyRequest>,
    handler: &LeadRelayHandler<ResendProvider>,
) -> Result<ProxyResponse, Error> {
    let response = handler.handle(event.payload.into()).await;
    Ok(response.into())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = RelayConfig::from_env()?;
    config.validate()?;

    let handler = LeadRelayHandler::from_config(config);
    if !handler.is_configured() {
        tracing::error!("RESEND_API_KEY not configured; every lead will fail until it is set");
    }

    let handler = &handler;
    run(service_fn(move |event: LambdaEvent<ProxyRequest>| async move {
        function_handler(event, handler).await
    }))
    .await
}
