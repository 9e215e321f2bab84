//! Browser Platform
//!
//! `web-sys` implementations of the page model's platform and audio seams.

use jambalaya::{AudioCue, Platform, SoundError};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, Window};

/// Reads scroll, viewport and user agent from the browser window
#[derive(Clone)]
pub struct BrowserPlatform {
    window: Option<Window>,
}

impl BrowserPlatform {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }
}

impl Default for BrowserPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for BrowserPlatform {
    fn scroll_y(&self) -> f64 {
        self.window
            .as_ref()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        // An unreadable width never counts as a small screen
        self.window
            .as_ref()
            .and_then(|w| w.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }

    fn user_agent(&self) -> Option<String> {
        self.window
            .as_ref()
            .and_then(|w| w.navigator().user_agent().ok())
            .filter(|ua| !ua.is_empty())
    }
}

/// The page's `<audio>` element
pub struct AudioElement {
    element: HtmlAudioElement,
}

impl AudioElement {
    pub fn new(element: &HtmlAudioElement) -> Self {
        Self {
            element: element.clone(),
        }
    }
}

impl AudioCue for AudioElement {
    fn rewind(&self) {
        self.element.set_current_time(0.0);
    }

    fn play(&self) -> Result<(), SoundError> {
        let promise = self
            .element
            .play()
            .map_err(|e| SoundError::Rejected(format!("{:?}", e)))?;

        // Autoplay policy and decode failures arrive as a rejected promise
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::debug!("click sound rejected: {:?}", e);
            }
        });

        Ok(())
    }
}
