//! Hero Component
//!
//! Title, intro and quick facts on the left, the dish on the right, the
//! mascot along the bottom edge. All three layers follow the scroll at their
//! own rate and the copy fades out.

use jambalaya::content::QUICK_FACTS;
use jambalaya::{regions, FactIcon, QuickFact};
use leptos::*;

use super::reveal_class;
use crate::state::use_page_state;

#[component]
pub fn Hero(copy_ref: NodeRef<html::Div>) -> impl IntoView {
    let state = use_page_state();
    let hero = state.hero;
    let seen = state.seen(regions::HERO_COPY);
    let assets = state.assets();

    view! {
        <section
            id="hero"
            class="relative overflow-hidden pt-12 pb-20 md:pt-20 md:pb-32"
        >
            <div class="container">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                    // Left side - Text
                    <div
                        id=regions::HERO_COPY
                        node_ref=copy_ref
                        class=move || reveal_class("scroll-fade-in", seen.get())
                        style=move || hero.get().copy_css()
                    >
                        <div class="mb-6">
                            <span class="accent-text text-lg">"Alastor's Recipe"</span>
                        </div>
                        <h1 class="text-5xl md:text-6xl font-bold text-[#8B2E2E] mb-6 leading-tight">
                            "Jambalaya"
                        </h1>
                        <p class="text-xl text-[#5C4033] mb-8 leading-relaxed font-light">
                            "Oh, deer! My mother once showed me a wonderful recipe for Jambalaya. \
                             In fact, it nearly killed her! Haha, you could say the kick was right out of Hell… \
                             oh, I’m on a roll!"
                        </p>

                        <div class="flex flex-wrap gap-6 mb-10">
                            {QUICK_FACTS
                                .into_iter()
                                .map(|fact| view! { <QuickFactItem fact=fact /> })
                                .collect_view()}
                        </div>
                    </div>

                    // Right side - Image
                    <div
                        class="relative h-96 md:h-[500px] rounded-2xl overflow-hidden shadow-2xl hover-lift"
                        style=move || hero.get().image_css()
                    >
                        <img
                            src=assets.hero_photo
                            alt="Delicious jambalaya dish"
                            class="w-full h-full object-cover"
                        />
                        <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-[#8B2E2E]/20" />
                    </div>
                </div>
            </div>
            <img
                src=assets.hero_mascot
                alt="Alastor"
                class="absolute bottom-0 left-1/2 -translate-x-1/2 w-[300px] md:w-[380px] pointer-events-none select-none"
                style=move || hero.get().mascot_css()
            />
        </section>
    }
}

#[component]
fn QuickFactItem(fact: QuickFact) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <FactGlyph icon=fact.icon />
            <span class="text-[#2C1810]">
                <strong>{fact.emphasis}</strong>
                " "
                {fact.caption}
            </span>
        </div>
    }
}

/// Outline icons drawn at 20px in the accent colour
#[component]
fn FactGlyph(icon: FactIcon) -> impl IntoView {
    let path = match icon {
        FactIcon::Clock => "M12 6v6l4 2M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
        FactIcon::Users => "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8a4 4 0 0 0 0 8M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
        FactIcon::Flame => "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z",
    };

    view! {
        <svg
            class="w-5 h-5 text-[#D4A574]"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}
