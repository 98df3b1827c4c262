//! Applies `updates` to the item named by `id`.

use itemstore::{handlers, runtime, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    telemetry::init();

    runtime::run("update_item", |repo, event| handlers::update_item(repo, event)).await
}
