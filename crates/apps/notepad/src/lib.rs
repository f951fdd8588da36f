//! Notepad desktop app: a single plain-text buffer seeded from the launch payload.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, LaunchData, WindowRuntimeId};
use leptos::*;

const WELCOME_TEXT: &str = "Welcome to Retro Desktop!\n\nThis is a simple notepad.";

fn initial_text(data: Option<&LaunchData>) -> String {
    data.and_then(LaunchData::text_content)
        .unwrap_or(WELCOME_TEXT)
        .to_string()
}

fn status_text(text: &str) -> String {
    let lines = text.split('\n').count();
    let chars = text.chars().count();
    format!("{lines} line(s), {chars} character(s)")
}

#[component]
/// Notepad app window contents.
pub fn NotepadApp(
    /// Hosting window id, used to expose the textarea as the window's primary input.
    window_id: WindowRuntimeId,
    /// Optional document to open instead of the welcome text.
    data: Option<LaunchData>,
) -> impl IntoView {
    let document_name = match &data {
        Some(LaunchData::TextDocument { name, .. }) => name.clone(),
        None => "Untitled".to_string(),
    };
    let text = create_rw_signal(initial_text(data.as_ref()));

    view! {
        <div class="app-shell app-notepad-shell">
            <div class="app-menubar" role="menubar">
                <span>"File"</span>
                <span>"Edit"</span>
                <span>"Search"</span>
                <span>"Help"</span>
            </div>
            <textarea
                id=window_primary_input_dom_id(window_id)
                class="app-notepad-editor"
                aria-label=document_name
                spellcheck="false"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            >
                {text.get_untracked()}
            </textarea>
            <div class="app-statusbar">
                <span>{move || text.with(|text| status_text(text))}</span>
            </div>
        </div>
    }
}
