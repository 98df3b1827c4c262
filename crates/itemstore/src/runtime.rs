//! Lambda runtime wiring shared by the handler binaries.

use std::future::Future;

use itemstore_core::gateway::{GatewayEvent, GatewayResponse};
use itemstore_core::storage::ItemRepository;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::Instrument;

use crate::storage::shared_repository;

/// Serve `handler` until the execution environment shuts down.
///
/// The raw payload goes to the handler untouched; only handlers that read
/// the body decode it. Invocations never fail at the runtime level.
pub async fn run<F, Fut>(operation: &'static str, handler: F) -> Result<(), Error>
where
    F: Fn(&'static dyn ItemRepository, GatewayEvent) -> Fut + Copy,
    Fut: Future<Output = GatewayResponse>,
{
    tracing::info!(operation, "Starting handler");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let LambdaEvent { payload, context } = event;
        let span = tracing::info_span!(
            "invocation",
            request_id = %context.request_id,
            operation
        );

        let event = GatewayEvent::new(payload);
        let response = async { handler(shared_repository().await, event).await }
            .instrument(span)
            .await;

        Ok::<GatewayResponse, Error>(response)
    }))
    .await
}
