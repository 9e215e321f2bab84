//! Tips Component
//!
//! "Mother's Secrets" cards in alternating colours.

use jambalaya::content::TIPS;
use jambalaya::{regions, Tip, TipTone};
use leptos::*;

use super::reveal_class;
use crate::state::use_page_state;

#[component]
pub fn Tips(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let seen = use_page_state().seen(regions::TIPS);

    view! {
        <section
            id=regions::TIPS
            node_ref=section_ref
            class=move || reveal_class("py-20 md:py-32 bg-white", seen.get())
        >
            <div class="container">
                <div class="mb-16">
                    <span class="accent-text text-lg">"A Tip from Yours Truly… and Mother"</span>
                    <h2 class="text-4xl md:text-5xl font-bold text-[#8B2E2E] mt-2">"Mother’s Secrets"</h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {TIPS.into_iter().map(|tip| view! { <TipCard tip=tip /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TipCard(tip: Tip) -> impl IntoView {
    let (card_class, body_class) = match tip.tone {
        TipTone::Ember => (
            "stagger-item bg-gradient-to-br from-[#8B2E2E] to-[#6B1E1E] text-white p-8 rounded-xl shadow-lg hover-lift",
            "text-[#F5E6D3] leading-relaxed",
        ),
        TipTone::Spice => (
            "stagger-item bg-gradient-to-br from-[#D4A574] to-[#C49560] text-[#2C1810] p-8 rounded-xl shadow-lg hover-lift",
            "leading-relaxed",
        ),
    };

    view! {
        <div class=card_class>
            <h3 class="text-2xl font-bold mb-4">{tip.title}</h3>
            <p class=body_class>{tip.body}</p>
        </div>
    }
}
