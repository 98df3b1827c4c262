//! Creates an item from `{name, description}`.

use itemstore::{handlers, runtime, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    telemetry::init();

    runtime::run("create_item", |repo, event| handlers::create_item(repo, event)).await
}
