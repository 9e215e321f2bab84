//! Recipe Page
//!
//! The full page. Owns the intersection observer over its sections, which
//! lives exactly as long as the sections are mounted.

use std::cell::RefCell;
use std::rc::Rc;

use jambalaya::{regions, MountedObservers, ObserverSet, PageSection};
use leptos::*;

use crate::components::{
    CallToAction, Cooking, Footer, Header, Hero, Ingredients, Instructions, Tips,
};
use crate::observers::{IntersectionWatch, ObservedRegions};
use crate::state::use_page_state;

#[component]
pub fn RecipePage() -> impl IntoView {
    let state = use_page_state();

    let hero_copy = create_node_ref::<html::Div>();
    let ingredients = create_node_ref::<html::Section>();
    let instructions = create_node_ref::<html::Section>();
    let tips = create_node_ref::<html::Section>();
    let cooking = create_node_ref::<html::Section>();
    let cooking_copy = create_node_ref::<html::Div>();

    let (sections, threshold, sound_source) = state.page.with_untracked(|p| {
        (
            p.render_plan().sections().to_vec(),
            p.config().visibility.threshold,
            p.config().sound.source.clone(),
        )
    });

    let watch = IntersectionWatch::new(
        threshold,
        ObservedRegions::new()
            .div(regions::HERO_COPY, hero_copy)
            .section(regions::INGREDIENTS, ingredients)
            .section(regions::INSTRUCTIONS, instructions)
            .section(regions::TIPS, tips)
            .section(regions::COOKING, cooking)
            .div(regions::COOKING_COPY, cooking_copy),
        move |samples| {
            state.page.update(|p| {
                p.on_intersections(&samples);
            });
        },
    );

    // Filled once the sections are in the document; emptied on cleanup. If
    // cleanup wins the race, dropping the last handle releases the observer.
    let mounted: Rc<RefCell<Option<MountedObservers>>> = Rc::default();

    let slot = Rc::clone(&mounted);
    request_animation_frame(move || match ObserverSet::new().with(watch).mount() {
        Ok(observers) => *slot.borrow_mut() = Some(observers),
        Err(e) => tracing::warn!("Section reveal disabled: {}", e),
    });

    on_cleanup(move || {
        if let Some(observers) = mounted.borrow_mut().take() {
            observers.unmount();
        }
    });

    let body = sections
        .into_iter()
        .map(|section| match section {
            PageSection::Header => view! { <Header /> }.into_view(),
            PageSection::Hero => view! { <Hero copy_ref=hero_copy /> }.into_view(),
            PageSection::Ingredients => {
                view! { <Ingredients section_ref=ingredients /> }.into_view()
            }
            PageSection::Instructions => {
                view! { <Instructions section_ref=instructions /> }.into_view()
            }
            PageSection::Tips => view! { <Tips section_ref=tips /> }.into_view(),
            PageSection::Cooking => {
                view! { <Cooking section_ref=cooking copy_ref=cooking_copy /> }.into_view()
            }
            PageSection::CallToAction => view! { <CallToAction /> }.into_view(),
            PageSection::Footer => view! { <Footer /> }.into_view(),
        })
        .collect_view();

    let audio = state.audio;

    view! {
        <div class="min-h-screen bg-gradient-to-b from-[#F5E6D3] via-[#F5E6D3] to-[#F9F3ED]">
            <audio node_ref=audio src=sound_source preload="auto" />
            {body}
        </div>
    }
}
