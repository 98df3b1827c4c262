//! Lists every item in the table.

use itemstore::{handlers, runtime, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    telemetry::init();

    runtime::run("list_items", |repo, event| handlers::list_items(repo, event)).await
}
