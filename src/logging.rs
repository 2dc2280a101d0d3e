//! Logging setup for embedding hosts.

/// Initialize logging with tracing_subscriber.
///
/// The crate logs through the `log` facade; the `tracing-log` bridge picks
/// those records up. Hosts with their own subscriber skip this.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("crawl_issues=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .compact()
        .with_target(false)
        .with_ansi(true)
        .init();
}
