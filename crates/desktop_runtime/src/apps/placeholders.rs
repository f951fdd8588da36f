//! Placeholder view for Paint, whose canvas is not built yet.

use leptos::*;

#[component]
pub(super) fn PaintPlaceholder() -> impl IntoView {
    view! {
        <div class="app-shell app-paint-shell">
            <div class="app-menubar" role="menubar">
                <span>"File"</span>
                <span>"Edit"</span>
                <span>"View"</span>
                <span>"Image"</span>
                <span>"Colors"</span>
                <span>"Help"</span>
            </div>
            <div class="app-placeholder-card">
                <p><strong>"Paint"</strong></p>
                <p>"Canvas placeholder ready."</p>
            </div>
            <div class="app-statusbar">
                <span>"For Help, click Help Topics on the Help Menu."</span>
            </div>
        </div>
    }
}
