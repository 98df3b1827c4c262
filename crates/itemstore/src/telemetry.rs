use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "itemstore=info";

/// Initialize the tracing subscriber.
///
/// Emits one JSON object per line without timestamps or colors; the Lambda
/// log stream adds its own timestamp to every line.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(false)
                .with_current_span(true)
                .without_time(),
        )
        .init();
}
