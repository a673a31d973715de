use tracing::info;

/// One-time process setup: logging plus lexicon warm-up. Call before
/// running the first batch so first-record latency stays predictable.
pub fn init() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    crate::application::use_cases::sentiment::warm_up();

    info!("Pipeline resources initialized");
}
