//! Explorer desktop app: browses the mock drive and opens text files in Notepad.

mod fs;

use desktop_app_contract::{AppHost, AppId};
use leptos::*;

pub use fs::{Activation, EntryKind, ExplorerError, ExplorerState, FsEntry};

#[component]
pub fn ExplorerApp(host: AppHost) -> impl IntoView {
    let explorer = create_rw_signal(ExplorerState::default());
    let selected_row = create_rw_signal::<Option<usize>>(None);
    let notice = create_rw_signal::<Option<String>>(None);

    let rows = create_memo(move |_| {
        explorer.with(|state| {
            state
                .items()
                .iter()
                .enumerate()
                .map(|(idx, entry)| (idx, entry.name.clone(), entry.kind))
                .collect::<Vec<_>>()
        })
    });

    let open_row = move |idx: usize| {
        let activation = explorer
            .try_update(|state| state.activate(idx))
            .unwrap_or(Activation::Missing);
        match activation {
            Activation::Entered => {
                selected_row.set(None);
                notice.set(None);
            }
            Activation::OpenDocument(data) => host.open_app(AppId::Notepad, Some(data)),
            Activation::Missing => {}
        }
    };

    let go_up = move |_| {
        explorer.update(ExplorerState::up);
        selected_row.set(None);
        notice.set(None);
    };

    let new_folder = move |_| {
        let created = explorer
            .try_update(ExplorerState::create_folder)
            .unwrap_or(Err(ExplorerError::RootLevel));
        match created {
            Ok(name) => notice.set(Some(format!("Created {name}"))),
            Err(err) => notice.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="app-shell app-explorer-shell">
            <div class="app-menubar" role="menubar">
                <span>"File"</span>
                <span>"Edit"</span>
                <span>"View"</span>
                <span>"Help"</span>
            </div>

            <div class="app-toolbar">
                <button
                    type="button"
                    disabled=move || explorer.with(ExplorerState::at_root)
                    on:click=go_up
                >
                    "Up"
                </button>
                <button type="button" on:click=new_folder>"New Folder"</button>
            </div>

            <div class="explorer-address">
                <span class="explorer-address-label">"Address"</span>
                <span class="explorer-address-path">{move || explorer.with(ExplorerState::address)}</span>
            </div>

            <div class="explorer-grid" role="listbox" aria-label="Folder contents">
                <For each=move || rows.get() key=|(idx, name, _)| (*idx, name.clone()) let:row>
                    {{
                        let (idx, name, kind) = row;
                        view! {
                            <button
                                type="button"
                                role="option"
                                class="explorer-item"
                                class:selected=move || selected_row.get() == Some(idx)
                                aria-selected=move || (selected_row.get() == Some(idx)).to_string()
                                on:click=move |_| selected_row.set(Some(idx))
                                on:dblclick=move |_| open_row(idx)
                            >
                                <span class="explorer-item-glyph" aria-hidden="true">{kind.glyph()}</span>
                                <span class="explorer-item-name">{name}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="app-statusbar">
                <span>{move || explorer.with(ExplorerState::status)}</span>
                <span>{move || notice.get().unwrap_or_default()}</span>
            </div>
        </div>
    }
}
