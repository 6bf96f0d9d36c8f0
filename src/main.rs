//! WayVR Dashboard
//!
//! Browser entry point. Build with `trunk serve` (debug builds run in
//! development mode, release builds in production mode).

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        use wayvr_dashboard::{logging, Bootstrap, Config};

        // Set up panic hook for better error messages in WASM
        console_error_panic_hook::set_once();

        let (config, config_error) = match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::from_build(), Some(e)),
        };

        logging::init(&config);
        if let Some(e) = config_error {
            tracing::warn!("Ignoring stored config: {}", e);
        }

        tracing::info!("WayVR Dashboard v{} starting", env!("CARGO_PKG_VERSION"));

        // A dashboard that cannot mount has nothing to fall back to
        if let Err(e) = Bootstrap::new(config).run() {
            tracing::error!("Startup failed: {}", e);
            wasm_bindgen::throw_str(&e.to_string());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("This binary is intended for the browser (WASM).");
        eprintln!("Please use `trunk serve` to run the development server.");
    }
}
