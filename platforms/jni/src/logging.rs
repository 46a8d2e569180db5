use std::io;
use std::sync::Once;

use tracing::Dispatch;
use tracing_subscriber::layer::{Layer, Layered};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

const DEFAULT_DIRECTIVE: &str = "info";
#[cfg(target_os = "android")]
const LOG_TAG: &str = env!("CARGO_CRATE_NAME");

static INIT: Once = Once::new();

type Filtered = Layered<EnvFilter, Registry>;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Subscriber writing to the platform sink, or to stdout when the sink
/// could not be opened; the open error is handed back for reporting
fn build_dispatch<L>(platform_layer: io::Result<L>) -> (Dispatch, Option<io::Error>)
where
    L: Layer<Filtered> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(env_filter());

    match platform_layer {
        Ok(layer) => (Dispatch::new(registry.with(layer)), None),
        Err(error) => (
            Dispatch::new(registry.with(tracing_subscriber::fmt::layer())),
            Some(error),
        ),
    }
}

/// Installs the global subscriber, at most once per process
pub(crate) fn initialize_logging() {
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        let (dispatch, sink_error) = build_dispatch(tracing_android::layer(LOG_TAG));

        #[cfg(not(target_os = "android"))]
        let (dispatch, sink_error) = build_dispatch(Ok(tracing_subscriber::fmt::layer()));

        // another subscriber was installed by the host, keep using it
        if let Err(error) = dispatch.try_init() {
            tracing::debug!("Logging already initialized: {error}");
        }

        // on Android stdout is discarded, so version lines are lost from here on
        if let Some(error) = sink_error {
            tracing::warn!("Platform log sink unavailable, falling back to stdout: {error}");
        }
    });
}
