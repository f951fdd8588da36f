use std::rc::Rc;

use desktop_app_contract::{window_primary_input_dom_id, ContentService, WindowRuntimeId};
use leptos::{ev::SubmitEvent, logging::warn, *};

pub const HOME_URL: &str = "http://www.microsoft.com";

const LOADING_HTML: &str =
    "<center><br/><br/><h3>Connecting to host...</h3><p>Dialing...</p></center>";
const LOAD_FAILED_HTML: &str = "<center><h1>Error</h1><p>Failed to load page.</p></center>";

/// Current address plus the back stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserNavigation {
    current: String,
    back_stack: Vec<String>,
}

impl Default for BrowserNavigation {
    fn default() -> Self {
        Self {
            current: HOME_URL.to_string(),
            back_stack: Vec::new(),
        }
    }
}

impl BrowserNavigation {
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Navigates to `address` unless it is blank or already showing.
    pub fn go(&mut self, address: &str) -> Option<String> {
        let address = address.trim();
        if address.is_empty() || address == self.current {
            return None;
        }
        Some(self.push(address.to_string()))
    }

    pub fn home(&mut self) -> String {
        self.push(HOME_URL.to_string())
    }

    pub fn back(&mut self) -> Option<String> {
        let previous = self.back_stack.pop()?;
        self.current = previous.clone();
        Some(previous)
    }

    fn push(&mut self, address: String) -> String {
        let previous = std::mem::replace(&mut self.current, address.clone());
        self.back_stack.push(previous);
        address
    }
}

#[component]
pub fn WebBrowserApp(window_id: WindowRuntimeId, content: Rc<dyn ContentService>) -> impl IntoView {
    let navigation = create_rw_signal(BrowserNavigation::default());
    let address_input = create_rw_signal(HOME_URL.to_string());
    let page_html = create_rw_signal(String::new());
    let loading = create_rw_signal(false);
    // Bumped on every load so a slow reply for an abandoned address is dropped.
    let load_generation = store_value(0_u64);
    let content = store_value(content);

    let load_page = move |address: String| {
        address_input.set(address.clone());
        page_html.set(LOADING_HTML.to_string());
        loading.set(true);
        let generation = load_generation
            .try_update_value(|value| {
                *value += 1;
                *value
            })
            .unwrap_or_default();

        let request = content.with_value(|content| content.web_page(address));
        spawn_local(async move {
            let html = match request.await {
                Ok(html) => html,
                Err(err) => {
                    warn!("web page request failed: {err}");
                    LOAD_FAILED_HTML.to_string()
                }
            };
            if load_generation.try_with_value(|current| *current == generation) == Some(true) {
                page_html.set(html);
                loading.set(false);
            }
        });
    };

    load_page(HOME_URL.to_string());

    let on_go = move |ev: SubmitEvent| {
        ev.prevent_default();
        let typed = address_input.get_untracked();
        if let Some(address) = navigation.try_update(|nav| nav.go(&typed)).flatten() {
            load_page(address);
        }
    };

    view! {
        <div class="app-shell app-browser-shell">
            <div class="app-menubar" role="menubar">
                <span>"File"</span>
                <span>"Edit"</span>
                <span>"View"</span>
                <span>"Go"</span>
                <span>"Favorites"</span>
                <span>"Help"</span>
            </div>

            <div class="app-toolbar">
                <button
                    type="button"
                    disabled=move || !navigation.with(BrowserNavigation::can_go_back)
                    on:click=move |_| {
                        if let Some(address) = navigation.try_update(BrowserNavigation::back).flatten() {
                            load_page(address);
                        }
                    }
                >
                    "Back"
                </button>
                <button type="button" disabled=true>"Forward"</button>
                <button
                    type="button"
                    on:click=move |_| load_page(navigation.with_untracked(|nav| nav.current().to_string()))
                >
                    "Refresh"
                </button>
                <button
                    type="button"
                    on:click=move |_| {
                        if let Some(address) = navigation.try_update(BrowserNavigation::home) {
                            load_page(address);
                        }
                    }
                >
                    "Home"
                </button>
            </div>

            <form class="browser-address-bar" on:submit=on_go>
                <span class="browser-address-label">"Address:"</span>
                <input
                    id=window_primary_input_dom_id(window_id)
                    type="text"
                    aria-label="Address"
                    spellcheck="false"
                    prop:value=move || address_input.get()
                    on:input=move |ev| address_input.set(event_target_value(&ev))
                />
                <button type="submit">"Go"</button>
            </form>

            <div class="browser-viewport" class:loading=move || loading.get()>
                <div class="browser-content" inner_html=move || page_html.get()></div>
            </div>

            <div class="app-statusbar">
                <span>{move || if loading.get() { "Opening page..." } else { "Done" }}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn go_only_navigates_to_a_new_address() {
        let mut nav = BrowserNavigation::default();
        assert_eq!(nav.go(HOME_URL), None);
        assert_eq!(nav.go("  "), None);
        assert_eq!(nav.go(" apple.com "), Some("apple.com".to_string()));
        assert_eq!(nav.current(), "apple.com");
        assert!(nav.can_go_back());
    }

    #[test]
    fn back_walks_the_stack_in_reverse() {
        let mut nav = BrowserNavigation::default();
        nav.go("a.com");
        nav.go("b.com");
        assert_eq!(nav.back(), Some("a.com".to_string()));
        assert_eq!(nav.back(), Some(HOME_URL.to_string()));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), HOME_URL);
    }

    #[test]
    fn home_always_pushes_history() {
        let mut nav = BrowserNavigation::default();
        assert_eq!(nav.home(), HOME_URL);
        assert!(nav.can_go_back());
    }
}
