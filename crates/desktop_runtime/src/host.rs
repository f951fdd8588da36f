//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

mod content;

use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
use desktop_app_contract::ContentService;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

pub use self::content::OfflineContentService;
use crate::{
    model::{DesktopConfig, WindowId, WindowRect},
    reducer::RuntimeEffect,
};

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    content: Rc<dyn ContentService>,
    config: DesktopConfig,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(OfflineContentService), DesktopConfig::default())
    }
}

impl DesktopHostContext {
    pub fn new(content: Rc<dyn ContentService>, config: DesktopConfig) -> Self {
        Self { content, config }
    }

    /// Returns the content backend shared by the chat and browser apps.
    pub fn content_service(&self) -> Rc<dyn ContentService> {
        self.content.clone()
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
        }
    }

    /// Moves keyboard focus into the window's primary input, if the app rendered one.
    ///
    /// Apps opt in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on their
    /// primary text field. Focus is deferred one tick so a freshly mounted window exists first.
    pub fn focus_window_input(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dom_id = window_primary_input_dom_id(window_id.0);
            let callback = Closure::once_into_js(move || {
                let Some(element) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.get_element_by_id(&dom_id))
                else {
                    return;
                };
                if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                    let _ = element.focus();
                }
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }

    /// Returns the full browser viewport.
    pub fn viewport_rect(&self) -> WindowRect {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
                return WindowRect {
                    x: 0,
                    y: 0,
                    w: width,
                    h: height,
                };
            }
        }

        WindowRect {
            x: 0,
            y: 0,
            w: FALLBACK_VIEWPORT_WIDTH,
            h: FALLBACK_VIEWPORT_HEIGHT,
        }
    }

    pub fn viewport_width(&self) -> i32 {
        self.viewport_rect().w
    }
}
