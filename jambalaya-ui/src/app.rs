//! App Root Component
//!
//! Builds the page state, attaches the window and document listeners for
//! the life of the app, and picks the branch to render.

use jambalaya::{ObserverSet, PageError, PageResult, PageView, RenderBranch};
use leptos::*;

use crate::observers::EventListener;
use crate::pages::{DesktopOnlyNotice, RecipePage};
use crate::platform::BrowserPlatform;
use crate::state::{provide_page_state, PageState};

/// Root application component
#[component]
pub fn App(page: PageView<BrowserPlatform>) -> impl IntoView {
    let state = provide_page_state(page);

    match top_level_observers(state).and_then(ObserverSet::mount) {
        Ok(mounted) => on_cleanup(move || mounted.unmount()),
        Err(e) => tracing::warn!("Page effects disabled: {}", e),
    }

    let branch = state.branch;

    move || match branch.get() {
        RenderBranch::Mobile => view! { <DesktopOnlyNotice /> }.into_view(),
        RenderBranch::Desktop => view! { <RecipePage /> }.into_view(),
        RenderBranch::Unknown => view! {}.into_view(),
    }
}

/// Scroll and resize on the window, mouse presses on the document
fn top_level_observers(state: PageState) -> PageResult<ObserverSet> {
    let window = web_sys::window()
        .ok_or_else(|| PageError::observer_start("scroll", "no window"))?;
    let document = window
        .document()
        .ok_or_else(|| PageError::observer_start("mousedown", "no document"))?;

    Ok(ObserverSet::new()
        .with(EventListener::new(window.clone(), "scroll", move |_| {
            state.on_scroll()
        }))
        .with(EventListener::new(window, "resize", move |_| {
            state.on_resize()
        }))
        .with(EventListener::new(document, "mousedown", move |_| {
            state.on_pointer_down()
        })))
}
