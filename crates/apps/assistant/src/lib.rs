//! Content-backed desktop apps: the assistant chat and the dial-up web browser.
//!
//! Both apps talk to the shell's shared [`desktop_app_contract::ContentService`] and render its
//! replies; neither reaches the network on its own.

mod browser;
mod chat;

pub use browser::{BrowserNavigation, WebBrowserApp, HOME_URL};
pub use chat::{ChatApp, ChatSession};
