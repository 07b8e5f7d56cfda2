use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Directives used when `RUST_LOG` is unset or blank.
fn default_directives(verbose: bool) -> &'static str {
    if verbose { "fxconv=debug" } else { "off" }
}

/// `RUST_LOG` takes precedence over the `--verbose` default.
pub fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let fallback = default_directives(verbose);
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(fallback))
        }
        None => EnvFilter::new(fallback),
    }
}

/// Logs go to stderr so they never interleave with the form on stdout.
pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbose, rust_log.as_deref());

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
