//! Ingredients Component
//!
//! Grid of ingredient cards.

use jambalaya::content::INGREDIENTS;
use jambalaya::{regions, Ingredient};
use leptos::*;

use super::reveal_class;
use crate::state::use_page_state;

#[component]
pub fn Ingredients(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let state = use_page_state();
    let seen = state.seen(regions::INGREDIENTS);
    let mascot = state.assets().ingredients_mascot;

    view! {
        <section
            id=regions::INGREDIENTS
            node_ref=section_ref
            class=move || reveal_class("py-20 md:py-32 bg-white relative", seen.get())
        >
            <div class="container relative z-10">
                <div class="mb-16 -translate-x-15">
                    <span class="accent-text text-lg">"What You'll Need"</span>
                    <h2 class="text-4xl md:text-5xl font-bold text-[#8B2E2E] mt-2">"Ingredients"</h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 -translate-x-20">
                    {INGREDIENTS
                        .into_iter()
                        .map(|ingredient| view! { <IngredientCard ingredient=ingredient /> })
                        .collect_view()}
                </div>
            </div>
            <img
                src=mascot
                alt="Alastor Human"
                class="absolute bottom-0 right-0 translate-x-45 w-[500px] md:w-[650px] pointer-events-none select-none z-0"
            />
        </section>
    }
}

#[component]
fn IngredientCard(ingredient: Ingredient) -> impl IntoView {
    view! {
        <div class="stagger-item bg-gradient-to-br from-[#F5E6D3] to-[#F9F3ED] p-6 rounded-xl hover-lift border border-[#E8D4C0]">
            <div class="flex items-start justify-between mb-3">
                <div>
                    <h3 class="text-lg font-semibold text-[#2C1810]">{ingredient.name}</h3>
                    <p class="text-[#D4A574] font-medium">{ingredient.amount}</p>
                </div>
                <span class="text-3xl">{ingredient.icon}</span>
            </div>
        </div>
    }
}
