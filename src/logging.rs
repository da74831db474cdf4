use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid: warnings from this
/// tool's own crates only.
const DEFAULT_FILTER: &str = "sshconfig=warn,hosts=warn";

/// Builds the event filter from `RUST_LOG`.
pub fn create_env_filter() -> EnvFilter {
    filter_from(std::env::var("RUST_LOG").ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the fmt subscriber, writing to stderr.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(create_env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
