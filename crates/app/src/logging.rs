//! Global tracing subscriber setup.
//!
//! Native builds log to stderr filtered by `RUST_LOG` (default `warn`); wasm
//! builds log to the browser console and route panics there too. Repeated
//! calls are no-ops.

use std::sync::Once;

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(install);
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        eprintln!("tracing subscriber not installed: {err}");
    }
}

#[cfg(target_arch = "wasm32")]
fn install() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}
