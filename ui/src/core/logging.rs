//! Logging setup.
//!
//! Library code only emits `tracing` events. Native entry points call
//! [`init`] once; in the browser no subscriber is installed.

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ui=info"));
    // A second call (tests, hot reload) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}
