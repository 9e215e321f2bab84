//! Jambalaya
//!
//! Alastor's Jambalaya recipe page, built with Leptos (WASM).
//!
//! # Features
//!
//! - Hero copy that fades and drifts as the visitor scrolls
//! - Sections that reveal once they have been on screen
//! - Desktop-only notice on phone-sized devices
//! - Click sound on every mouse press
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All behavior lives in the `jambalaya` crate's `PageView`;
//! this crate wires browser events into it and renders the result.

use jambalaya::{PageConfig, PageView};
use leptos::*;

mod app;
mod components;
mod logging;
mod observers;
mod pages;
mod platform;
mod state;

/// Page configuration baked into the bundle
const PAGE_TOML: &str = include_str!("../page.toml");

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = match PageConfig::from_toml_str(PAGE_TOML) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };

    logging::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!("page.toml rejected, using defaults: {}", e);
    }

    let page = match PageView::new(platform::BrowserPlatform::new(), config) {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to build page view: {}", e);
            return;
        }
    };

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App page=page /> });
}
