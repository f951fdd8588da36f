//! Run-dialog command resolution.

use crate::model::AppId;

const COMMAND_PROMPT_MISSING: &str = "Command Prompt not installed.";

/// What the shell should do with a submitted run-dialog command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResolution {
    /// Open the app; the run dialog then closes.
    Launch(AppId),
    /// Show the message; the run dialog stays open.
    Fail(String),
    /// Blank input.
    Ignore,
}

/// Maps typed run-dialog text to an application, matching case-insensitively.
pub fn resolve_run_command(command: &str) -> RunResolution {
    let typed = command.trim();
    if typed.is_empty() {
        return RunResolution::Ignore;
    }

    match app_alias(typed) {
        Some(app_id) => RunResolution::Launch(app_id),
        None if typed.eq_ignore_ascii_case("cmd") => {
            RunResolution::Fail(COMMAND_PROMPT_MISSING.to_string())
        }
        None => RunResolution::Fail(file_not_found_message(typed)),
    }
}

/// Program names the run dialog and the boot deep link both accept.
pub fn app_alias(name: &str) -> Option<AppId> {
    let app_id = match name.trim().to_ascii_lowercase().as_str() {
        "notepad" => AppId::Notepad,
        "calc" | "calculator" => AppId::Calculator,
        "mspaint" | "paint" | "pbrush" => AppId::Paint,
        "mine" | "minesweeper" | "winmine" => AppId::Minesweeper,
        "explorer" => AppId::Explorer,
        "chat" | "assistant" | "gemini" => AppId::Chat,
        "iexplore" | "internet" => AppId::WebBrowser,
        _ => return None,
    };
    Some(app_id)
}

fn file_not_found_message(command: &str) -> String {
    format!(
        "Cannot find file '{command}' (or one of its components). Make sure the path and filename \
         are correct and that all required libraries are available."
    )
}
