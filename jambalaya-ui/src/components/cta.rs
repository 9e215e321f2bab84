use leptos::*;

use crate::state::use_page_state;

/// Closing call to action
#[component]
pub fn CallToAction() -> impl IntoView {
    let mascot = use_page_state().assets().cta_mascot;

    view! {
        <section class="py-20 md:py-32 bg-[#8B2E2E] text-white relative overflow-visible">
            <div class="absolute inset-0 opacity-10">
                <div class="absolute top-10 left-10 w-40 h-40 bg-white rounded-full blur-3xl" />
                <div class="absolute bottom-10 right-10 w-40 h-40 bg-white rounded-full blur-3xl" />
            </div>
            <img
                src=mascot
                alt="Alastor2"
                class="absolute bottom-0 right-0 w-[290px] md:w-[370px] pointer-events-none select-none z-20"
            />

            <div class="container relative z-10 text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">"Ready to cook, my little devils?"</h2>
                <p class="text-xl text-[#F5E6D3] mb-10 max-w-2xl mx-auto">
                    "Stir up a pot of pure delight! This Jambalaya will thrill, tantalize, \
                     and perhaps even frighten the taste buds of any daring soul!"
                </p>
            </div>
        </section>
    }
}
