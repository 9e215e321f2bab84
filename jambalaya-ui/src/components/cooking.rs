//! Cooking Component
//!
//! Photo of the pot with the one-pot checklist beside it.

use jambalaya::content::ONE_POT_CHECKLIST;
use jambalaya::regions;
use leptos::*;

use super::reveal_class;
use crate::state::use_page_state;

#[component]
pub fn Cooking(
    section_ref: NodeRef<html::Section>,
    copy_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let state = use_page_state();
    let section_seen = state.seen(regions::COOKING);
    let copy_seen = state.seen(regions::COOKING_COPY);
    let photo = state.assets().cooking_photo;

    view! {
        <section
            id=regions::COOKING
            node_ref=section_ref
            class=move || reveal_class(
                "py-20 md:py-32 bg-gradient-to-b from-[#F5E6D3] to-[#F9F3ED]",
                section_seen.get(),
            )
        >
            <div class="container">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                    <div class="relative h-96 md:h-[450px] rounded-2xl overflow-hidden shadow-2xl hover-lift order-2 md:order-1">
                        <img src=photo alt="Jambalaya cooking process" class="w-full h-full object-cover" />
                        <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-[#8B2E2E]/20" />
                    </div>

                    <div
                        id=regions::COOKING_COPY
                        node_ref=copy_ref
                        class=move || reveal_class("order-1 md:order-2 scroll-fade-in", copy_seen.get())
                    >
                        <span class="accent-text text-lg">"Alastor's Tips"</span>
                        <h2 class="text-4xl md:text-5xl font-bold text-[#8B2E2E] mt-2 mb-6">
                            "The Perfect One-Pot Meal"
                        </h2>
                        <p class="text-lg text-[#5C4033] mb-6 leading-relaxed">
                            "Ah, Jambalaya! The ultimate little torment of comfort, all sizzling together in a single cauldron… \
                             cleanup, a mere trifle! But ohhh, the beauty, my dear devils, is how each grain \
                             of rice soaks up the wickedly spiced broth… a symphony of chaos and flavor, \
                             all in one-pot. Niffty ! dont clean that pot my dear!"
                        </p>
                        <ul class="space-y-4 mb-8">
                            {ONE_POT_CHECKLIST
                                .into_iter()
                                .map(|item| view! {
                                    <li class="flex items-start gap-3">
                                        <span class="text-[#D4A574] font-bold text-xl">"✓"</span>
                                        <span class="text-[#2C1810]">{item}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
