use std::{cell::RefCell, rc::Rc};

use desktop_app_contract::{AppCommand, AppHost, AppMountContext};

use super::*;
use crate::{
    interaction::{GestureController, GestureListeners},
    model::ResizeEdge,
};

#[derive(Debug, Clone, Copy)]
enum GestureStart {
    TitleBar,
    Resize(ResizeEdge),
}

type ListenerSlot = Rc<RefCell<Option<GestureListeners>>>;

fn end_gesture(controller: StoredValue<GestureController>, listeners: &ListenerSlot) {
    controller.update_value(|controller| {
        controller.pointer_up();
    });
    let released = listeners.borrow_mut().take();
    drop(released);
}

/// Attaches window-level move/up/cancel listeners for the gesture that just started.
fn attach_gesture_listeners(
    runtime: DesktopRuntimeContext,
    controller: StoredValue<GestureController>,
    listeners: &ListenerSlot,
) {
    let on_move = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        if let Some(action) = controller.with_value(|controller| controller.pointer_move(pointer)) {
            runtime.dispatch_action(action);
        }
    });
    let slot = listeners.clone();
    let on_up = window_event_listener(ev::pointerup, move |_| end_gesture(controller, &slot));
    let slot = listeners.clone();
    let on_cancel =
        window_event_listener(ev::pointercancel, move |_| end_gesture(controller, &slot));

    let previous = listeners
        .borrow_mut()
        .replace(GestureListeners::new(vec![on_move, on_up, on_cancel]));
    drop(previous);
}

fn dispatch_app_command(runtime: DesktopRuntimeContext, window_id: WindowId, command: AppCommand) {
    let action = match command {
        AppCommand::CloseWindow => DesktopAction::CloseWindow { window_id },
        AppCommand::OpenApp { app_id, data } => DesktopAction::OpenApp {
            app_id,
            data,
            viewport_width: runtime.viewport_width(),
        },
        AppCommand::RunCommand { command } => DesktopAction::RunCommand {
            window_id,
            command,
            viewport_width: runtime.viewport_width(),
        },
    };
    runtime.dispatch_action(action);
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let taskbar_height = runtime.taskbar_height();

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.window_manager.window(window_id).cloned())
    });
    let is_active =
        create_memo(move |_| runtime.state.with(|desktop| desktop.window_manager.is_active(window_id)));
    let maximized = move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized));
    let hidden = move || !window.with(|w| w.as_ref().is_some_and(|w| w.is_painted()));
    let maximizable = move || {
        window.with(|w| {
            w.as_ref()
                .is_some_and(|w| apps::app_descriptor(w.app_id).maximizable)
        })
    };

    let controller = store_value(GestureController::new(window_id));
    let listeners: ListenerSlot = Rc::new(RefCell::new(None));
    {
        let listeners = listeners.clone();
        on_cleanup(move || {
            let released = listeners.borrow_mut().take();
            drop(released);
        });
    }

    let start_gesture = Rc::new(move |start: GestureStart, ev: &web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let Some(record) = window.get_untracked() else {
            return;
        };
        let pointer = pointer_from_pointer_event(ev);
        let focus = controller
            .try_update_value(|controller| match start {
                GestureStart::TitleBar => Some(controller.title_bar_pointer_down(&record, pointer)),
                GestureStart::Resize(edge) => {
                    controller.resize_handle_pointer_down(&record, edge, pointer)
                }
            })
            .flatten();
        if let Some(action) = focus {
            runtime.dispatch_action(action);
        }
        if controller.with_value(GestureController::is_active) {
            attach_gesture_listeners(runtime, controller, &listeners);
        }
    });

    let on_title_pointerdown = {
        let start_gesture = start_gesture.clone();
        move |ev: web_sys::PointerEvent| start_gesture(GestureStart::TitleBar, &ev)
    };
    let resize_handle = |edge: ResizeEdge| {
        let start_gesture = start_gesture.clone();
        view! {
            <div
                class=format!("window-resize-handle {}", edge.css_class())
                aria-hidden="true"
                hidden=maximized
                on:pointerdown=move |ev: web_sys::PointerEvent| {
                    start_gesture(GestureStart::Resize(edge), &ev)
                }
            />
        }
    };

    let focus_frame = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let stop_pointer = |ev: web_sys::PointerEvent| ev.stop_propagation();

    let content = window.with_untracked(|w| w.as_ref().map(|w| (w.app_id, w.data.clone())));
    let host = AppHost::new(Callback::new(move |command| {
        dispatch_app_command(runtime, window_id, command)
    }));
    let body = match content {
        Some((app_id, data)) => apps::render_window_contents(
            app_id,
            AppMountContext {
                window_id: window_id.0,
                data,
                host,
                content: runtime.host.with_value(|host| host.content_service()),
            },
        ),
        None => ().into_view(),
    };

    view! {
        <section
            class="desktop-window"
            class:active=move || is_active.get()
            class:maximized=maximized
            hidden=hidden
            style=move || {
                window.with(|w| {
                    w.as_ref()
                        .map(|w| w.frame_style(taskbar_height))
                        .unwrap_or_default()
                })
            }
            role="dialog"
            aria-label=move || window.with(|w| w.as_ref().map(|w| w.title.clone()))
            on:pointerdown=focus_frame
        >
            <header class="titlebar" on:pointerdown=on_title_pointerdown>
                <span class="titlebar-title">
                    {move || window.with(|w| w.as_ref().map(|w| w.title.clone()))}
                </span>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=stop_pointer
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        }
                    >
                        "_"
                    </button>
                    <button
                        aria-label=move || if maximized() { "Restore window" } else { "Maximize window" }
                        disabled=move || !maximizable()
                        on:pointerdown=stop_pointer
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
                        }
                    >
                        {move || if maximized() { "❐" } else { "□" }}
                    </button>
                    <button
                        aria-label="Close window"
                        on:pointerdown=stop_pointer
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">{body}</div>
            {resize_handle(ResizeEdge::East)}
            {resize_handle(ResizeEdge::South)}
            {resize_handle(ResizeEdge::SouthEast)}
        </section>
    }
}
