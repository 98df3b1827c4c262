//! Deletes the item named by `id`.

use itemstore::{handlers, runtime, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    telemetry::init();

    runtime::run("delete_item", |repo, event| handlers::delete_item(repo, event)).await
}
