//! Navigation Component
//!
//! Sticky header with the logo and in-page links.

use jambalaya::PageSection;
use leptos::*;

use crate::state::use_page_state;

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let favicon = use_page_state().assets().favicon;

    view! {
        <header class="sticky top-0 z-50 bg-white/80 backdrop-blur-md shadow-sm">
            <div class="container flex items-center justify-between py-4">
                // Logo and brand
                <div class="flex items-end gap-2">
                    <img src=favicon alt="TopAl" class="w-16 h-16" />
                    <h1 class="text-2xl font-bold text-[#8B2E2E]">"Jambalaya"</h1>
                </div>

                // In-page links
                <nav class="hidden md:flex gap-8">
                    {PageSection::ALL
                        .into_iter()
                        .filter_map(|section| Some((section.anchor()?, section.nav_label()?)))
                        .map(|(anchor, label)| view! { <NavLink anchor=anchor label=label /> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    anchor: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=format!("#{}", anchor)
            class="text-[#2C1810] hover:text-[#8B2E2E] transition-colors duration-300"
        >
            {label}
        </a>
    }
}
