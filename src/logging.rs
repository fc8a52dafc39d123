use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
    Registry,
};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "dapp=info,dapp_utils=info,warn";

/// Install the global subscriber
///
/// Logs go to stderr so the formatted values on stdout can be piped.
/// `verbose` raises the crates of this workspace to `trace`.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dapp=trace,dapp_utils=trace,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    Registry::default().with(console_layer).init();
}
