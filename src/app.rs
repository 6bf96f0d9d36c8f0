//! App Root Component
//!
//! Resolves the global state and hands it to the dashboard.

use leptos::*;

use crate::pages::Dashboard;
use crate::state::GlobalsSlot;

/// Root application component
///
/// Every render reuses the `Globals` held by `globals_slot`; only the first
/// one constructs it.
#[component]
pub fn Main(globals_slot: GlobalsSlot) -> impl IntoView {
    let globals = globals_slot.get_or_init();

    // Descendants pick it up without prop drilling
    provide_context(globals.clone());

    view! { <Dashboard globals=globals /> }
}
