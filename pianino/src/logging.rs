/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (for example
/// `"pianino=info"`) is used. Calling it again is harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(default_directive: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // fails only when a subscriber is already set
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Routes panics to the browser console when built with the `wasm` feature.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(_default_directive: &str) {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}
