use std::time::Duration;

use super::*;
use crate::taskbar::taskbar_entries;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let entries = create_memo(move |_| state.with(|desktop| taskbar_entries(&desktop.window_manager)));

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            style=format!("height:{}px;", runtime.taskbar_height())
            on:click=move |ev| ev.stop_propagation()
        >
            <button
                id="taskbar-start-button"
                class="start-button"
                class:pressed=move || state.with(|desktop| desktop.start_menu_open)
                aria-haspopup="menu"
                aria-expanded=move || state.with(|desktop| desktop.start_menu_open)
                on:click=move |ev| {
                    ev.stop_propagation();
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <span class="taskbar-glyph" aria-hidden="true">"⊞"</span>
                <span>"Start"</span>
            </button>

            <div class="taskbar-windows" role="group" aria-label="Open windows">
                <For each=move || entries.get() key=|entry| (entry.window_id.0, entry.active) let:entry>
                    {{
                        let window_id = entry.window_id;
                        let glyph = apps::app_descriptor(entry.app_id).glyph;
                        view! {
                            <button
                                class="taskbar-window-button"
                                class:active=entry.active
                                aria-pressed=entry.active.to_string()
                                title=entry.title.clone()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::CloseOverlays);
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow { window_id });
                                }
                            >
                                <span class="taskbar-app-icon" aria-hidden="true">{glyph}</span>
                                <span class="taskbar-window-title">{entry.title}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray">
                <span class="taskbar-clock">{move || format_taskbar_clock(clock_now.get())}</span>
            </div>
        </footer>
    }
}
