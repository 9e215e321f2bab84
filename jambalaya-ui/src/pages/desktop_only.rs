//! Desktop-only notice shown on phone-sized devices.

use leptos::*;

#[component]
pub fn DesktopOnlyNotice() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen text-center p-4 bg-[#8B2E2E] text-white">
            <div>
                <h1 class="text-3xl font-bold mb-4">"Desktop Only"</h1>
                <p class="text-lg">
                    "This site is optimized for desktop only. Please visit from a computer for the full access."
                </p>
            </div>
        </div>
    }
}
