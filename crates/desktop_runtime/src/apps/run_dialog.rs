//! Run dialog content: a single command prompt with OK/Cancel.

use desktop_app_contract::{window_primary_input_dom_id, AppHost, WindowRuntimeId};
use leptos::*;

#[component]
pub(super) fn RunDialogApp(window_id: WindowRuntimeId, host: AppHost) -> impl IntoView {
    let command = create_rw_signal(String::new());
    let submit = move || host.run_command(command.get_untracked().trim());

    view! {
        <div class="app-shell app-run-shell">
            <div class="app-run-prompt">
                <span class="app-run-glyph" aria-hidden="true">"🏃"</span>
                <p>
                    "Type the name of a program, folder, or document, and Windows will open it for you."
                </p>
            </div>
            <form
                class="app-run-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label>
                    "Open:"
                    <input
                        id=window_primary_input_dom_id(window_id)
                        type="text"
                        autocomplete="off"
                        prop:value=move || command.get()
                        on:input=move |ev| command.set(event_target_value(&ev))
                    />
                </label>
            </form>
            <div class="app-run-actions">
                <button type="button" class="app-action" on:click=move |_| submit()>"OK"</button>
                <button type="button" class="app-action" on:click=move |_| host.close()>"Cancel"</button>
                <button type="button" class="app-action" disabled=true>"Browse..."</button>
            </div>
        </div>
    }
}
