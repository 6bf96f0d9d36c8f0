//! Toast Notification Component
//!
//! Shows the transient notice held in global state.

use leptos::*;

use crate::state::Globals;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let globals = use_context::<Globals>().expect("Globals not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                globals.notice().map(|message| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3 rounded-lg shadow-lg">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{message}</span>
                    </div>
                })
            }}
        </div>
    }
}
