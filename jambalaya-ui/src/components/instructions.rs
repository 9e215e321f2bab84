//! Instructions Component
//!
//! Numbered steps, one row each.

use jambalaya::content::STEPS;
use jambalaya::{regions, Step};
use leptos::*;

use super::reveal_class;
use crate::state::use_page_state;

#[component]
pub fn Instructions(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let state = use_page_state();
    let seen = state.seen(regions::INSTRUCTIONS);
    let mascot = state.assets().instructions_mascot;

    view! {
        <section
            id=regions::INSTRUCTIONS
            node_ref=section_ref
            class=move || reveal_class(
                "py-20 md:py-32 bg-gradient-to-b from-[#F5E6D3] to-[#F9F3ED] relative overflow-visible",
                seen.get(),
            )
        >
            <div class="container">
                <div class="mb-16">
                    <span class="accent-text text-lg">"Step by Step"</span>
                    <h2 class="text-4xl md:text-5xl font-bold text-[#8B2E2E] mt-2">"How to Make It"</h2>
                </div>

                <div class="space-y-8">
                    {STEPS.into_iter().map(|step| view! { <StepRow step=step /> }).collect_view()}
                </div>
            </div>
            <img
                src=mascot
                alt="Alastor Instructions"
                class="absolute bottom-0 left-0 w-[300px] md:w-[450px] pointer-events-none select-none z-20"
            />
        </section>
    }
}

#[component]
fn StepRow(step: Step) -> impl IntoView {
    view! {
        <div class="stagger-item grid grid-cols-1 md:grid-cols-3 gap-8 items-start">
            <div class="flex items-center justify-center md:justify-start">
                <div class="w-16 h-16 bg-[#8B2E2E] rounded-full flex items-center justify-center text-white text-2xl font-bold shadow-lg">
                    {step.number}
                </div>
            </div>
            <div class="md:col-span-2 bg-white p-8 rounded-xl shadow-md hover-lift border border-[#E8D4C0]">
                <h3 class="text-2xl font-bold text-[#8B2E2E] mb-3">{step.title}</h3>
                <p class="text-[#5C4033] leading-relaxed">{step.description}</p>
            </div>
        </div>
    }
}
