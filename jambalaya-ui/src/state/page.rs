//! Page State
//!
//! Reactive wrapper around `jambalaya::PageView`. Event handlers update the
//! one signal; components read narrow memos so a scroll only re-renders the
//! hero and a resize only swaps the branch.

use jambalaya::{AssetConfig, HeroStyle, PageView, RenderBranch};
use leptos::*;

use crate::platform::{AudioElement, BrowserPlatform};

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct PageState {
    pub page: RwSignal<PageView<BrowserPlatform>>,
    /// Current top-level branch
    pub branch: Memo<RenderBranch>,
    /// Hero fade and parallax for the current scroll offset
    pub hero: Memo<HeroStyle>,
    /// The click sound element, present while the full page is mounted
    pub audio: NodeRef<html::Audio>,
}

/// Classify the device, read the initial scroll offset and provide the state
pub fn provide_page_state(mut page: PageView<BrowserPlatform>) -> PageState {
    page.mount();

    let page = create_rw_signal(page);
    let state = PageState {
        page,
        branch: create_memo(move |_| page.with(|p| p.branch())),
        hero: create_memo(move |_| page.with(|p| p.hero_style())),
        audio: create_node_ref::<html::Audio>(),
    };

    provide_context(state);
    state
}

pub fn use_page_state() -> PageState {
    use_context::<PageState>().expect("PageState not found")
}

impl PageState {
    pub fn on_scroll(&self) {
        self.page.update(|p| {
            p.on_scroll();
        });
    }

    pub fn on_resize(&self) {
        self.page.update(|p| {
            p.on_resize();
        });
    }

    /// Restart the click sound. Only the full page carries the element.
    pub fn on_pointer_down(&self) {
        let cue = if self.branch.get_untracked() == RenderBranch::Desktop {
            self.audio.get_untracked().map(|el| AudioElement::new(&el))
        } else {
            None
        };

        self.page.update(|p| {
            p.on_pointer_down(cue.as_ref());
        });
    }

    /// Whether the region has been on screen at least once
    pub fn seen(&self, id: &'static str) -> Memo<bool> {
        let page = self.page;
        create_memo(move |_| page.with(|p| p.is_visible(id)))
    }

    pub fn assets(&self) -> AssetConfig {
        self.page.with_untracked(|p| p.config().assets.clone())
    }
}
