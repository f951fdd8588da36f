//! Calculator desktop app.

mod engine;

use engine::{keyboard_action, BinaryOp, CalcAction, CalculatorState};
use leptos::{ev::KeyboardEvent, *};

#[derive(Clone, Copy)]
struct CalcKeySpec {
    id: &'static str,
    label: &'static str,
    class_name: &'static str,
    action: Option<CalcAction>,
}

const fn key(
    id: &'static str,
    label: &'static str,
    class_name: &'static str,
    action: CalcAction,
) -> CalcKeySpec {
    CalcKeySpec {
        id,
        label,
        class_name,
        action: Some(action),
    }
}

const fn gap(id: &'static str) -> CalcKeySpec {
    CalcKeySpec {
        id,
        label: "",
        class_name: "gap",
        action: None,
    }
}

const CALC_KEYS: [CalcKeySpec; 28] = [
    gap("gap-top"),
    key("back", "Back", "control", CalcAction::Backspace),
    key("ce", "CE", "control", CalcAction::ClearEntry),
    key("c", "C", "control", CalcAction::Clear),
    key("mc", "MC", "memory", CalcAction::MemoryClear),
    key("7", "7", "digit", CalcAction::Digit('7')),
    key("8", "8", "digit", CalcAction::Digit('8')),
    key("9", "9", "digit", CalcAction::Digit('9')),
    key("div", "/", "operator", CalcAction::Binary(BinaryOp::Divide)),
    key("mr", "MR", "memory", CalcAction::MemoryRecall),
    key("4", "4", "digit", CalcAction::Digit('4')),
    key("5", "5", "digit", CalcAction::Digit('5')),
    key("6", "6", "digit", CalcAction::Digit('6')),
    key("mul", "*", "operator", CalcAction::Binary(BinaryOp::Multiply)),
    key("ms", "MS", "memory", CalcAction::MemoryStore),
    key("1", "1", "digit", CalcAction::Digit('1')),
    key("2", "2", "digit", CalcAction::Digit('2')),
    key("3", "3", "digit", CalcAction::Digit('3')),
    key("sub", "-", "operator", CalcAction::Binary(BinaryOp::Subtract)),
    key("madd", "M+", "memory", CalcAction::MemoryAdd),
    key("0", "0", "digit", CalcAction::Digit('0')),
    key("sign", "+/-", "digit", CalcAction::ToggleSign),
    key("dot", ".", "digit", CalcAction::Decimal),
    key("add", "+", "operator", CalcAction::Binary(BinaryOp::Add)),
    gap("gap-a"),
    gap("gap-b"),
    gap("gap-c"),
    key("eq", "=", "operator", CalcAction::Equals),
];

#[component]
pub fn CalculatorApp() -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <div class="app-shell app-calculator-shell">
            <div class="app-menubar" role="menubar">
                <span>"Edit"</span>
                <span>"View"</span>
                <span>"Help"</span>
            </div>

            <div class="calculator-workspace" tabindex="0" on:keydown=on_keydown>
                <div class="calc-display-panel">
                    <span class="calc-memory-indicator">
                        {move || if calc.with(CalculatorState::memory_active) { "M" } else { "" }}
                    </span>
                    <div class="calc-display" role="status" aria-live="polite">
                        {move || calc.with(CalculatorState::display_text)}
                    </div>
                </div>

                <div class="calc-keypad" role="group" aria-label="Calculator keys">
                    {CALC_KEYS
                        .iter()
                        .map(|spec| match spec.action {
                            Some(action) => view! {
                                <button
                                    type="button"
                                    class=format!("calc-key {}", spec.class_name)
                                    data-key=spec.id
                                    on:click=move |_| calc.update(|state| state.apply(action))
                                >
                                    {spec.label}
                                </button>
                            }
                            .into_view(),
                            None => view! { <div class="calc-key gap" aria-hidden="true"></div> }
                                .into_view(),
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_ids_are_unique() {
        let mut ids: Vec<_> = CALC_KEYS.iter().map(|spec| spec.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CALC_KEYS.len());
    }
}
