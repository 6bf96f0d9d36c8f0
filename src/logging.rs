//! Logging setup
//!
//! Routes `tracing` output to the browser console.

use crate::config::Config;

/// Install the global subscriber; a no-op off wasm32
pub fn init(config: &Config) {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.max_log_level())
            .build(),
    );

    #[cfg(not(target_arch = "wasm32"))]
    let _ = config;
}
