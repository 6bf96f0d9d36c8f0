//! Dashboard Page
//!
//! Top-level view: header, error banner and session status.

use leptos::*;

use crate::components::{ErrorBanner, Toast};
use crate::state::Globals;

/// Dashboard page component
#[component]
pub fn Dashboard(globals: Globals) -> impl IntoView {
    let started = chrono::DateTime::from_timestamp_millis(globals.started_at())
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let errors = globals.clone();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Header
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 flex items-center justify-between h-16">
                    <span class="text-xl font-bold">"WayVR Dashboard"</span>
                    <span class="text-sm text-gray-400">
                        {format!("v{}", env!("CARGO_PKG_VERSION"))}
                    </span>
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 space-y-6">
                <ErrorBanner />

                // Session status
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Session"</h2>
                    <dl class="grid grid-cols-2 gap-4 text-sm">
                        <dt class="text-gray-400">"Started"</dt>
                        <dd>{started}</dd>
                        <dt class="text-gray-400">"Errors reported"</dt>
                        <dd>{move || errors.error_count()}</dd>
                    </dl>
                </section>
            </main>

            <Toast />
        </div>
    }
}
