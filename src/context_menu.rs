//! Context Menu Guard
//!
//! Outside development builds the browser's native context menu is
//! suppressed for the whole page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use crate::config::RunMode;

/// An event whose default browser action can be cancelled
pub trait Cancelable {
    fn cancel(&self);
}

impl Cancelable for Event {
    fn cancel(&self) {
        self.prevent_default();
    }
}

/// What happens when the user opens a context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuPolicy {
    /// Browser default menu
    Native,
    /// Default action prevented on every event
    Suppressed,
}

impl ContextMenuPolicy {
    pub fn for_mode(mode: RunMode) -> Self {
        if mode.is_development() {
            Self::Native
        } else {
            Self::Suppressed
        }
    }

    /// Apply the policy to one event; returns whether it was suppressed
    pub fn apply<E: Cancelable>(&self, event: &E) -> bool {
        match self {
            Self::Native => false,
            Self::Suppressed => {
                event.cancel();
                true
            }
        }
    }
}

/// Register the document-wide handler for `policy`
///
/// Returns whether a handler was registered. The handler lives for the rest
/// of the page.
pub fn install(document: &Document, policy: ContextMenuPolicy) -> bool {
    if policy == ContextMenuPolicy::Native {
        tracing::debug!("Leaving native context menu enabled");
        return false;
    }

    let on_context_menu = Closure::wrap(Box::new(move |event: Event| {
        policy.apply(&event);
    }) as Box<dyn FnMut(Event)>);
    document.set_oncontextmenu(Some(on_context_menu.as_ref().unchecked_ref()));
    on_context_menu.forget();

    tracing::debug!("Context menu suppressed");
    true
}
