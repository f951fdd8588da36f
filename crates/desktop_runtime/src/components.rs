//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{
    menus::{DesktopContextMenu, MessageBoxDialog, StartMenu},
    taskbar::Taskbar,
    window::DesktopWindow,
};

use crate::{
    apps,
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI: icons, the window layer, overlays, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window_ids = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .window_manager
                .windows()
                .iter()
                .map(|w| w.id)
                .collect::<Vec<WindowId>>()
        })
    });

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            on:click=move |_| {
                let overlays_open = state
                    .with_untracked(|desktop| desktop.start_menu_open || desktop.context_menu.is_some());
                if overlays_open {
                    runtime.dispatch_action(DesktopAction::CloseOverlays);
                }
            }
        >
            <div
                class="desktop-backdrop"
                on:contextmenu=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::OpenContextMenu {
                        pointer: PointerPosition::new(ev.client_x(), ev.client_y()),
                        viewport: runtime.host.with_value(|host| host.viewport_rect()),
                    });
                }
            >
                <div class="desktop-icon-grid">
                    <For each=apps::desktop_icon_apps key=|app| app.app_id let:app>
                        <button
                            class="desktop-icon"
                            data-app=app.app_id.as_str()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                runtime.dispatch_action(DesktopAction::OpenApp {
                                    app_id: app.app_id,
                                    data: None,
                                    viewport_width: runtime.viewport_width(),
                                });
                            }
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true">{app.glyph}</span>
                            <span class="desktop-icon-label">{app.desktop_icon_label}</span>
                        </button>
                    </For>
                </div>
            </div>

            <div class="desktop-window-layer">
                <For each=move || window_ids.get() key=|id| id.0 let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </div>

            <StartMenu />
            <DesktopContextMenu />
            <MessageBoxDialog />
            <Taskbar />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_taskbar_clock(snapshot: TaskbarClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_uses_twelve_hour_format() {
        let format = |hour, minute| format_taskbar_clock(TaskbarClockSnapshot { hour, minute });
        assert_eq!(format(0, 5), "12:05 AM");
        assert_eq!(format(9, 30), "09:30 AM");
        assert_eq!(format(12, 0), "12:00 PM");
        assert_eq!(format(23, 59), "11:59 PM");
    }
}
