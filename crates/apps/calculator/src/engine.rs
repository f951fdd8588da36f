//! Immediate-execution four-function calculator state.

const MAX_ENTRY_DIGITS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcAction {
    Digit(char),
    Decimal,
    Backspace,
    ClearEntry,
    Clear,
    Binary(BinaryOp),
    ToggleSign,
    Equals,
    MemoryClear,
    MemoryRecall,
    MemoryStore,
    MemoryAdd,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalculatorState {
    display: String,
    prev_value: Option<f64>,
    operator: Option<BinaryOp>,
    waiting_for_new_value: bool,
    memory: Option<f64>,
    error: Option<&'static str>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            prev_value: None,
            operator: None,
            waiting_for_new_value: false,
            memory: None,
            error: None,
        }
    }
}

impl CalculatorState {
    pub(crate) fn apply(&mut self, action: CalcAction) {
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::Backspace => self.backspace(),
            CalcAction::ClearEntry => {
                self.error = None;
                self.display = "0".to_string();
                self.waiting_for_new_value = false;
            }
            CalcAction::Clear => {
                let memory = self.memory;
                *self = Self {
                    memory,
                    ..Self::default()
                };
            }
            CalcAction::Binary(op) => self.set_operator(op),
            CalcAction::ToggleSign => self.toggle_sign(),
            CalcAction::Equals => self.equals(),
            CalcAction::MemoryClear => self.memory = None,
            CalcAction::MemoryRecall => {
                if let Some(value) = self.memory {
                    self.error = None;
                    self.display = format_number(value);
                    self.waiting_for_new_value = true;
                }
            }
            CalcAction::MemoryStore => {
                if let Some(value) = self.current_value() {
                    self.memory = Some(value);
                }
            }
            CalcAction::MemoryAdd => {
                if let Some(value) = self.current_value() {
                    self.memory = Some(self.memory.unwrap_or(0.0) + value);
                }
            }
        }
    }

    pub(crate) fn display_text(&self) -> String {
        self.error
            .map(str::to_string)
            .unwrap_or_else(|| self.display.clone())
    }

    pub(crate) fn memory_active(&self) -> bool {
        self.memory.is_some()
    }

    fn current_value(&self) -> Option<f64> {
        if self.error.is_some() {
            return None;
        }
        self.display.parse::<f64>().ok()
    }

    fn input_digit(&mut self, digit: char) {
        if self.error.is_some() {
            self.apply(CalcAction::Clear);
        }
        if self.waiting_for_new_value {
            self.display = digit.to_string();
            self.waiting_for_new_value = false;
            return;
        }
        let digits = self.display.chars().filter(char::is_ascii_digit).count();
        if digits >= MAX_ENTRY_DIGITS {
            return;
        }
        match self.display.as_str() {
            "0" => self.display = digit.to_string(),
            "-0" => self.display = format!("-{digit}"),
            _ => self.display.push(digit),
        }
    }

    fn input_decimal(&mut self) {
        if self.error.is_some() {
            self.apply(CalcAction::Clear);
        }
        if self.waiting_for_new_value {
            self.display = "0.".to_string();
            self.waiting_for_new_value = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.waiting_for_new_value || self.error.is_some() {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) {
        if self.error.is_some() || self.display == "0" {
            return;
        }
        if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    fn set_operator(&mut self, op: BinaryOp) {
        let Some(current) = self.current_value() else {
            return;
        };
        match (self.prev_value, self.operator) {
            // A second operator before a new operand only swaps the pending operator.
            (Some(_), Some(_)) if self.waiting_for_new_value => {}
            (Some(prev), Some(pending)) => match apply_binary(prev, pending, current) {
                Ok(result) => {
                    self.display = format_number(result);
                    self.prev_value = Some(result);
                }
                Err(message) => return self.set_error(message),
            },
            _ => self.prev_value = Some(current),
        }
        self.operator = Some(op);
        self.waiting_for_new_value = true;
    }

    fn equals(&mut self) {
        let (Some(prev), Some(op)) = (self.prev_value, self.operator) else {
            return;
        };
        let Some(current) = self.current_value() else {
            return;
        };
        match apply_binary(prev, op, current) {
            Ok(result) => {
                self.display = format_number(result);
                self.prev_value = None;
                self.operator = None;
                self.waiting_for_new_value = true;
            }
            Err(message) => self.set_error(message),
        }
    }

    fn set_error(&mut self, message: &'static str) {
        self.error = Some(message);
        self.display = "0".to_string();
        self.prev_value = None;
        self.operator = None;
        self.waiting_for_new_value = true;
    }
}

pub(crate) fn keyboard_action(key: &str) -> Option<CalcAction> {
    let action = match key {
        "." | "," => CalcAction::Decimal,
        "+" => CalcAction::Binary(BinaryOp::Add),
        "-" => CalcAction::Binary(BinaryOp::Subtract),
        "*" | "x" | "X" => CalcAction::Binary(BinaryOp::Multiply),
        "/" => CalcAction::Binary(BinaryOp::Divide),
        "=" | "Enter" => CalcAction::Equals,
        "Backspace" => CalcAction::Backspace,
        "Delete" => CalcAction::ClearEntry,
        "Escape" => CalcAction::Clear,
        "F9" => CalcAction::ToggleSign,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) if digit.is_ascii_digit() => CalcAction::Digit(digit),
                _ => return None,
            }
        }
    };
    Some(action)
}

fn apply_binary(lhs: f64, op: BinaryOp, rhs: f64) -> Result<f64, &'static str> {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs == 0.0 {
                return Err("Cannot divide by zero");
            }
            lhs / rhs
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err("Overflow")
    }
}

fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }

    let mut text = format!("{value:.12}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(state: &mut CalculatorState, keys: &str) {
        for key in keys.chars() {
            let action = keyboard_action(&key.to_string()).expect("mapped key");
            state.apply(action);
        }
    }

    fn run(keys: &str) -> String {
        let mut state = CalculatorState::default();
        press(&mut state, keys);
        state.display_text()
    }

    #[test]
    fn digits_replace_leading_zero() {
        assert_eq!(run("007"), "7");
        assert_eq!(run("1.5.2"), "1.52");
        assert_eq!(run("12345678901234567890"), "1234567890123456");
    }

    #[test]
    fn operators_execute_immediately() {
        assert_eq!(run("2+3*4="), "20");
        assert_eq!(run("9-4-"), "5");
        assert_eq!(run("7/2="), "3.5");
    }

    #[test]
    fn repeated_operator_only_swaps_pending_operator() {
        assert_eq!(run("6+*2="), "12");
    }

    #[test]
    fn equals_without_operator_is_ignored() {
        assert_eq!(run("42="), "42");
        assert_eq!(run("4+5=="), "9");
    }

    #[test]
    fn backspace_is_ignored_after_a_result() {
        let mut state = CalculatorState::default();
        press(&mut state, "12+3=");
        state.apply(CalcAction::Backspace);
        assert_eq!(state.display_text(), "15");

        press(&mut state, "98");
        state.apply(CalcAction::Backspace);
        state.apply(CalcAction::Backspace);
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn division_by_zero_reports_error_and_recovers() {
        let mut state = CalculatorState::default();
        press(&mut state, "5/0=");
        assert_eq!(state.display_text(), "Cannot divide by zero");
        press(&mut state, "3");
        assert_eq!(state.display_text(), "3");
    }

    #[test]
    fn sign_toggle_and_clear() {
        let mut state = CalculatorState::default();
        press(&mut state, "25");
        state.apply(CalcAction::ToggleSign);
        assert_eq!(state.display_text(), "-25");
        state.apply(CalcAction::ToggleSign);
        assert_eq!(state.display_text(), "25");
        press(&mut state, "+1");
        state.apply(CalcAction::Clear);
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn memory_survives_clear() {
        let mut state = CalculatorState::default();
        press(&mut state, "8");
        state.apply(CalcAction::MemoryStore);
        press(&mut state, "+2=");
        state.apply(CalcAction::MemoryAdd);
        state.apply(CalcAction::Clear);
        assert!(state.memory_active());
        state.apply(CalcAction::MemoryRecall);
        assert_eq!(state.display_text(), "18");
        state.apply(CalcAction::MemoryClear);
        assert!(!state.memory_active());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(keyboard_action("a"), None);
        assert_eq!(keyboard_action("12"), None);
        assert_eq!(keyboard_action("Escape"), Some(CalcAction::Clear));
    }
}
