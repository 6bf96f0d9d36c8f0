//! Application Bootstrap
//!
//! Installs the page-level hooks and mounts the root component.

use leptos::*;

use crate::app::Main;
use crate::config::Config;
use crate::context_menu::{self, ContextMenuPolicy};
use crate::diagnostics;
use crate::error::{BootError, BootResult};
use crate::mount;
use crate::state::GlobalsSlot;

/// One-shot startup routine
///
/// `run` consumes the bootstrap, so a bootstrap mounts at most once.
pub struct Bootstrap {
    config: Config,
    slot: GlobalsSlot,
}

impl Bootstrap {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            slot: GlobalsSlot::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context_menu_policy(&self) -> ContextMenuPolicy {
        ContextMenuPolicy::for_mode(self.config.mode)
    }

    /// Install hooks and mount `Main` into the configured element
    ///
    /// Returns the slot owning the global state so callers can observe it.
    pub fn run(self) -> BootResult<GlobalsSlot> {
        let document = mount::document()?;

        context_menu::install(&document, self.context_menu_policy());

        if self.config.diagnostics.enabled {
            let window = web_sys::window().ok_or(BootError::NoWindow)?;
            diagnostics::install(&window, &self.slot, &self.config.diagnostics)?;
        }

        let target = mount::mount_target(&document, &self.config.mount_id)?;

        let globals_slot = self.slot.clone();
        mount_to(target, move || view! { <Main globals_slot=globals_slot /> });

        tracing::info!(
            "Dashboard mounted into #{} ({} mode)",
            self.config.mount_id,
            self.config.mode.label()
        );
        Ok(self.slot)
    }
}
