#[cfg(not(target_arch = "wasm32"))]
mod preview;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    app::logging::init();
    if let Err(err) = preview::run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

// The browser entry point lives in the library (`app::web`).
#[cfg(target_arch = "wasm32")]
fn main() {}
