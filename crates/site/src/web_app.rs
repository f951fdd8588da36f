use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Retro Desktop" />
        <Meta name="description" content="A retro desktop shell with draggable windows, running in the browser." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Splits an `open=notepad,calc` query value into the app names to launch at boot.
///
/// Names are resolved later by the window manager, which accepts app ids and run-dialog aliases.
pub fn boot_apps_from_query(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let boot_apps = query.with_untracked(|map| boot_apps_from_query(map.get("open").map(String::as_str)));

    view! {
        <DesktopProvider boot_apps=boot_apps>
            <DesktopShell />
        </DesktopProvider>
    }
}
