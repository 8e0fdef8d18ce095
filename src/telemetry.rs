use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber. The filter comes from `RUST_LOG`
/// and falls back to `info`. `log` records (actix-web's access log) are
/// bridged into the same output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}
