//! Browser Observers
//!
//! DOM event listeners and the intersection observer, each wrapped as a
//! `jambalaya::Observer` so the page model's lifecycle decides when they
//! attach and guarantees they detach.

use jambalaya::{IntersectionSample, Observer, PageError, PageResult};
use leptos::{html, NodeRef};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// One `addEventListener` registration
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl EventListener {
    pub fn new(
        target: impl Into<EventTarget>,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Self {
        Self {
            target: target.into(),
            event,
            callback: Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>),
            attached: false,
        }
    }
}

impl Observer for EventListener {
    fn name(&self) -> &'static str {
        self.event
    }

    fn start(&mut self) -> PageResult<()> {
        self.target
            .add_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            .map_err(|e| PageError::observer_start(self.event, format!("{:?}", e)))?;
        self.attached = true;
        Ok(())
    }

    fn stop(&mut self) {
        if !self.attached {
            return;
        }
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
        self.attached = false;
    }
}

type ElementLookup = Box<dyn Fn() -> Option<Element>>;

/// Registered regions and how to find their elements once mounted
#[derive(Default)]
pub struct ObservedRegions {
    regions: Vec<(&'static str, ElementLookup)>,
}

impl ObservedRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, id: &'static str, node: NodeRef<html::Section>) -> Self {
        self.regions.push((
            id,
            Box::new(move || {
                node.get_untracked().map(|el| {
                    let el: &Element = &el;
                    el.clone()
                })
            }),
        ));
        self
    }

    pub fn div(mut self, id: &'static str, node: NodeRef<html::Div>) -> Self {
        self.regions.push((
            id,
            Box::new(move || {
                node.get_untracked().map(|el| {
                    let el: &Element = &el;
                    el.clone()
                })
            }),
        ));
        self
    }

    /// Elements currently in the document. Missing ones are skipped.
    fn elements(&self) -> Vec<Element> {
        self.regions
            .iter()
            .filter_map(|(id, lookup)| {
                let element = lookup();
                if element.is_none() {
                    tracing::debug!("region {} not mounted, not observed", id);
                }
                element
            })
            .collect()
    }
}

/// An `IntersectionObserver` over the registered regions
pub struct IntersectionWatch {
    threshold: f64,
    regions: ObservedRegions,
    callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    observer: Option<IntersectionObserver>,
}

impl IntersectionWatch {
    pub fn new(
        threshold: f64,
        regions: ObservedRegions,
        mut on_samples: impl FnMut(Vec<IntersectionSample>) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let samples: Vec<IntersectionSample> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    IntersectionSample::new(
                        entry.target().id(),
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    )
                })
                .collect();
            on_samples(samples);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        Self {
            threshold,
            regions,
            callback,
            observer: None,
        }
    }
}

impl Observer for IntersectionWatch {
    fn name(&self) -> &'static str {
        "intersection"
    }

    fn start(&mut self) -> PageResult<()> {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.threshold));

        let observer =
            IntersectionObserver::new_with_options(self.callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| PageError::observer_start("intersection", format!("{:?}", e)))?;

        let elements = self.regions.elements();
        for element in &elements {
            observer.observe(element);
        }
        tracing::debug!("observing {} regions", elements.len());

        self.observer = Some(observer);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_listener_detaches_on_stop() {
        let document = web_sys::window().unwrap().document().unwrap();
        let fired = Rc::new(Cell::new(0));

        let counter = Rc::clone(&fired);
        let mut listener = EventListener::new(document.clone(), "mousedown", move |_| {
            counter.set(counter.get() + 1);
        });

        listener.start().unwrap();
        let event = Event::new("mousedown").unwrap();
        document.dispatch_event(&event).unwrap();
        assert_eq!(fired.get(), 1);

        listener.stop();
        document.dispatch_event(&event).unwrap();
        assert_eq!(fired.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_watch_without_regions_starts_and_stops() {
        let mut watch = IntersectionWatch::new(0.1, ObservedRegions::new(), |_| {});
        watch.start().unwrap();
        watch.stop();
        assert!(watch.observer.is_none());
    }
}
