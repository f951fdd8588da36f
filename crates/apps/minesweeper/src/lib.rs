//! Minesweeper desktop app: a 9x9 field with ten mines.

mod engine;

use engine::{Minefield, GRID_SIZE};
use leptos::*;
use rand::{rngs::SmallRng, SeedableRng};

fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random().to_bits() ^ js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5eed
    }
}

#[component]
pub fn MinesweeperApp() -> impl IntoView {
    let mut rng = SmallRng::seed_from_u64(entropy_seed());
    let field = create_rw_signal(Minefield::generate(&mut rng));
    let rng = store_value(rng);

    let new_game = move || {
        if let Some(next) = rng.try_update_value(|rng| Minefield::generate(rng)) {
            field.set(next);
        }
    };

    let cells = (0..GRID_SIZE)
        .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
        .map(|(row, col)| {
            let cell = move || field.with(|field| field.cell(row, col)).unwrap_or_default();
            view! {
                <button
                    type="button"
                    class="minesweeper-cell"
                    class:revealed=move || cell().revealed
                    style=move || format!("color:{};", cell().text_color())
                    on:click=move |_| field.update(|field| field.reveal(row, col))
                    on:contextmenu=move |ev| {
                        ev.prevent_default();
                        field.update(|field| field.toggle_flag(row, col));
                    }
                >
                    {move || cell().label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="app-shell app-minesweeper-shell">
            <div class="app-toolbar" role="group" aria-label="Minesweeper controls">
                <span class="app-counter" aria-label="Mines remaining">
                    {move || field.with(Minefield::counter_text)}
                </span>
                <button
                    type="button"
                    class="app-action"
                    aria-label="New game"
                    on:click=move |_| new_game()
                >
                    {move || field.with(|field| field.status().face())}
                </button>
                <span class="app-counter">"000"</span>
            </div>
            <div
                class="minesweeper-grid"
                role="grid"
                style=format!("display:grid;grid-template-columns:repeat({GRID_SIZE}, 1.5rem);")
            >
                {cells}
            </div>
            <div class="app-statusbar">
                <span>{move || field.with(|field| field.status().banner())}</span>
            </div>
        </div>
    }
}
