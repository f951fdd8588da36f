use super::*;
use crate::{
    apps::{app_descriptor, launcher_entries, LauncherEntry},
    model::MessageKind,
};

const CONTEXT_MENU_DISABLED_ITEMS: [&str; 5] =
    ["Arrange Icons", "Line up Icons", "Paste", "Paste Shortcut", "New"];

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let entry_view = move |entry: LauncherEntry| match entry {
        LauncherEntry::App(app_id) => {
            let descriptor = app_descriptor(app_id);
            view! {
                <button
                    role="menuitem"
                    class="start-menu-item"
                    data-app=app_id.as_str()
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::OpenApp {
                            app_id,
                            data: None,
                            viewport_width: runtime.viewport_width(),
                        });
                    }
                >
                    <span class="start-menu-glyph" aria-hidden="true">{descriptor.glyph}</span>
                    <span>{descriptor.launcher_label}</span>
                </button>
            }
            .into_view()
        }
        LauncherEntry::Separator => {
            view! { <div class="menu-separator" role="separator"></div> }.into_view()
        }
        LauncherEntry::Settings => view! {
            <button role="menuitem" class="start-menu-item" disabled=true>
                <span class="start-menu-glyph" aria-hidden="true">"⚙"</span>
                <span>"Settings"</span>
            </button>
        }
        .into_view(),
        LauncherEntry::Shutdown => view! {
            <button
                role="menuitem"
                class="start-menu-item"
                on:click=move |_| runtime.dispatch_action(DesktopAction::Shutdown)
            >
                <span class="start-menu-glyph" aria-hidden="true">"⏻"</span>
                <span>"Shutdown"</span>
            </button>
        }
        .into_view(),
    };

    view! {
        <Show when=move || state.with(|desktop| desktop.start_menu_open) fallback=|| ()>
            <nav
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                style=format!("bottom:{}px;", runtime.taskbar_height())
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                }
            >
                <div class="start-menu-banner" aria-hidden="true">
                    <span>"Retro"</span>
                    <span class="start-menu-banner-light">"95"</span>
                </div>
                <div class="start-menu-items">
                    {launcher_entries().iter().copied().map(entry_view).collect_view()}
                </div>
            </nav>
        </Show>
    }
}

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let anchor = create_memo(move |_| runtime.state.with(|desktop| desktop.context_menu));

    view! {
        <Show when=move || anchor.get().is_some() fallback=|| ()>
            {move || {
                let Some(menu) = anchor.get() else {
                    return ().into_view();
                };
                view! {
                    <div
                        id="desktop-context-menu"
                        class="desktop-context-menu"
                        role="menu"
                        aria-label="Desktop context menu"
                        style=format!("left:{}px;top:{}px;", menu.x, menu.y)
                        on:click=move |ev| ev.stop_propagation()
                        on:contextmenu=move |ev| stop_mouse_event(&ev)
                    >
                        {CONTEXT_MENU_DISABLED_ITEMS
                            .iter()
                            .map(|label| {
                                view! {
                                    <button role="menuitem" class="context-menu-item" disabled=true>
                                        {*label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <div class="menu-separator" role="separator"></div>
                        <button
                            role="menuitem"
                            class="context-menu-item"
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::ShowSystemProperties);
                            }
                        >
                            "Properties"
                        </button>
                    </div>
                }
                .into_view()
            }}
        </Show>
    }
}

#[component]
pub(super) fn MessageBoxDialog() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let message = create_memo(move |_| runtime.state.with(|desktop| desktop.message_box.clone()));

    view! {
        <Show when=move || message.with(Option::is_some) fallback=|| ()>
            {move || {
                let Some(message) = message.get() else {
                    return ().into_view();
                };
                let glyph = match message.kind {
                    MessageKind::Info => "ℹ",
                    MessageKind::Error => "⛔",
                };
                view! {
                    <div class="message-box-overlay" on:click=move |ev| ev.stop_propagation()>
                        <div class="message-box" role="alertdialog" aria-label=message.title.clone()>
                            <header class="titlebar">
                                <span class="titlebar-title">{message.title}</span>
                            </header>
                            <div class="message-box-body">
                                <span class="message-box-glyph" aria-hidden="true">{glyph}</span>
                                <pre class="message-box-text">{message.body}</pre>
                            </div>
                            <div class="message-box-actions">
                                <button
                                    class="message-box-ok"
                                    on:click=move |_| runtime.dispatch_action(DesktopAction::DismissMessageBox)
                                >
                                    "OK"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                .into_view()
            }}
        </Show>
    }
}
