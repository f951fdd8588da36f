//! Application registry: per-app window defaults, launcher/desktop catalogs, and content mounting.

mod placeholders;
mod run_dialog;

use desktop_app_assistant::{ChatApp, WebBrowserApp};
use desktop_app_calculator::CalculatorApp;
use desktop_app_contract::AppMountContext;
use desktop_app_explorer::ExplorerApp;
use desktop_app_minesweeper::MinesweeperApp;
use desktop_app_notepad::NotepadApp;
use leptos::*;

use crate::model::{AppId, WindowSize};

use self::{
    placeholders::PaintPlaceholder,
    run_dialog::RunDialogApp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title: &'static str,
    pub default_size: WindowSize,
    pub launcher_label: &'static str,
    pub desktop_icon_label: &'static str,
    pub glyph: &'static str,
    /// At most one window of this app may be open; a second open focuses it.
    pub single_instance: bool,
    /// Controls both the maximize toggle and auto-maximize on small screens.
    pub maximizable: bool,
}

pub fn app_descriptor(app_id: AppId) -> AppDescriptor {
    match app_id {
        AppId::Notepad => AppDescriptor {
            app_id,
            title: "Untitled - Notepad",
            default_size: WindowSize::new(400, 300),
            launcher_label: "Notepad",
            desktop_icon_label: "Notepad",
            glyph: "📝",
            single_instance: false,
            maximizable: true,
        },
        AppId::Chat => AppDescriptor {
            app_id,
            title: "Assistant 95",
            default_size: WindowSize::new(500, 400),
            launcher_label: "Assistant",
            desktop_icon_label: "Assistant",
            glyph: "💬",
            single_instance: false,
            maximizable: true,
        },
        AppId::Minesweeper => AppDescriptor {
            app_id,
            title: "Minesweeper",
            default_size: WindowSize::new(300, 340),
            launcher_label: "Minesweeper",
            desktop_icon_label: "Minesweeper",
            glyph: "💣",
            single_instance: false,
            maximizable: true,
        },
        AppId::Calculator => AppDescriptor {
            app_id,
            title: "Calculator",
            default_size: WindowSize::new(260, 320),
            launcher_label: "Calculator",
            desktop_icon_label: "Calculator",
            glyph: "🧮",
            single_instance: false,
            maximizable: true,
        },
        AppId::Paint => AppDescriptor {
            app_id,
            title: "untitled - Paint",
            default_size: WindowSize::new(600, 450),
            launcher_label: "Paint",
            desktop_icon_label: "Paint",
            glyph: "🎨",
            single_instance: false,
            maximizable: true,
        },
        AppId::Explorer => AppDescriptor {
            app_id,
            title: "My Computer",
            default_size: WindowSize::new(500, 400),
            launcher_label: "Windows Explorer",
            desktop_icon_label: "My Computer",
            glyph: "💻",
            single_instance: false,
            maximizable: true,
        },
        AppId::Run => AppDescriptor {
            app_id,
            title: "Run",
            default_size: WindowSize::new(350, 180),
            launcher_label: "Run...",
            desktop_icon_label: "Run",
            glyph: "🏃",
            single_instance: true,
            maximizable: false,
        },
        AppId::WebBrowser => AppDescriptor {
            app_id,
            title: "Internet Explorer",
            default_size: WindowSize::new(600, 480),
            launcher_label: "Internet Explorer",
            desktop_icon_label: "The Internet",
            glyph: "🌐",
            single_instance: false,
            maximizable: true,
        },
    }
}

/// Start menu rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherEntry {
    App(AppId),
    Separator,
    /// Shown greyed out; there is no settings app.
    Settings,
    Shutdown,
}

static LAUNCHER_ENTRIES: [LauncherEntry; 13] = [
    LauncherEntry::App(AppId::Chat),
    LauncherEntry::App(AppId::WebBrowser),
    LauncherEntry::Separator,
    LauncherEntry::App(AppId::Explorer),
    LauncherEntry::App(AppId::Paint),
    LauncherEntry::App(AppId::Calculator),
    LauncherEntry::App(AppId::Notepad),
    LauncherEntry::App(AppId::Minesweeper),
    LauncherEntry::Separator,
    LauncherEntry::Settings,
    LauncherEntry::App(AppId::Run),
    LauncherEntry::Separator,
    LauncherEntry::Shutdown,
];

const DESKTOP_ICON_APPS: [AppId; 7] = [
    AppId::Explorer,
    AppId::WebBrowser,
    AppId::Chat,
    AppId::Notepad,
    AppId::Paint,
    AppId::Calculator,
    AppId::Minesweeper,
];

pub fn launcher_entries() -> &'static [LauncherEntry] {
    &LAUNCHER_ENTRIES
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    DESKTOP_ICON_APPS.iter().copied().map(app_descriptor).collect()
}

/// Mounts the leaf application for `app_id` with its launch context.
pub fn render_window_contents(app_id: AppId, context: AppMountContext) -> View {
    match app_id {
        AppId::Notepad => view! {
            <NotepadApp window_id=context.window_id data=context.data />
        }
        .into_view(),
        AppId::Chat => view! {
            <ChatApp window_id=context.window_id content=context.content />
        }
        .into_view(),
        AppId::Minesweeper => view! { <MinesweeperApp /> }.into_view(),
        AppId::Calculator => view! { <CalculatorApp /> }.into_view(),
        AppId::Paint => view! { <PaintPlaceholder /> }.into_view(),
        AppId::Explorer => view! { <ExplorerApp host=context.host /> }.into_view(),
        AppId::Run => view! {
            <RunDialogApp window_id=context.window_id host=context.host />
        }
        .into_view(),
        AppId::WebBrowser => view! {
            <WebBrowserApp window_id=context.window_id content=context.content />
        }
        .into_view(),
    }
}
