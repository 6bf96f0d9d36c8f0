//! Error Banner Component
//!
//! Shows the last global error until the user dismisses it.

use leptos::*;

use crate::state::Globals;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let globals = use_context::<Globals>().expect("Globals not found");

    view! {
        {move || {
            let on_dismiss = globals.clone();
            globals.global_error().map(|message| view! {
                <div class="flex items-start justify-between space-x-4 bg-red-900 border border-red-600 rounded-lg px-4 py-3">
                    <div class="flex items-start space-x-3">
                        <span class="text-lg">"✕"</span>
                        <pre class="text-sm whitespace-pre-wrap break-all">{message}</pre>
                    </div>
                    <button
                        class="text-sm text-red-200 hover:text-white"
                        on:click=move |_| {
                            on_dismiss.clear_global_error();
                            on_dismiss.show_notice("Error dismissed");
                        }
                    >
                        "Dismiss"
                    </button>
                </div>
            })
        }}
    }
}
