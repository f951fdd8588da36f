//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    model::{
        AppId, ContextMenuAnchor, DesktopConfig, LaunchData, MessageBox, PointerPosition,
        WindowId, WindowPosition, WindowRect, WindowSize,
    },
    run_command::{resolve_run_command, RunResolution},
    taskbar::{resolve_taskbar_click, TaskbarClick},
    window_manager::WindowManager,
};

const SYSTEM_PROPERTIES: &str = "Retro Desktop System\n\nCopyright © 2025\n\nComputer:\n   \
                                 Retro OS 95\n   Leptos Powered\n   640KB RAM";
const SHUTDOWN_NOTICE: &str = "It is now safe to turn off your computer.";

/// Complete shell state: the window collection plus transient shell overlays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    pub window_manager: WindowManager,
    pub start_menu_open: bool,
    pub context_menu: Option<ContextMenuAnchor>,
    pub message_box: Option<MessageBox>,
}

impl DesktopState {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            window_manager: WindowManager::new(config),
            ..Self::default()
        }
    }

    fn close_overlays(&mut self) {
        self.start_menu_open = false;
        self.context_menu = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window for an application.
    OpenApp {
        app_id: AppId,
        data: Option<LaunchData>,
        /// Current viewport width, used for small-screen auto-maximize.
        viewport_width: i32,
    },
    /// Open a window for an application named by a string token.
    OpenAppByName {
        name: String,
        data: Option<LaunchData>,
        viewport_width: i32,
    },
    CloseWindow {
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        window_id: WindowId,
    },
    MinimizeWindow {
        window_id: WindowId,
    },
    ToggleMaximize {
        window_id: WindowId,
    },
    MoveWindow {
        window_id: WindowId,
        position: WindowPosition,
    },
    ResizeWindow {
        window_id: WindowId,
        size: WindowSize,
    },
    /// Taskbar button click: focus a background/minimized window or minimize the active one.
    ToggleTaskbarWindow {
        window_id: WindowId,
    },
    ToggleStartMenu,
    CloseStartMenu,
    /// Right-click on the desktop background.
    OpenContextMenu {
        pointer: PointerPosition,
        viewport: WindowRect,
    },
    /// Click outside the start menu and context menu.
    CloseOverlays,
    ShowSystemProperties,
    Shutdown,
    /// Submit text typed into the run dialog hosted by `window_id`.
    RunCommand {
        window_id: WindowId,
        command: String,
        viewport_width: i32,
    },
    DismissMessageBox,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window's primary input.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that could not be applied. State is left unchanged.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),
    #[error(transparent)]
    UnknownApplication(#[from] desktop_app_contract::UnknownAppId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not present
/// and [`ReducerError::UnknownApplication`] when an application name does not parse.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp {
            app_id,
            data,
            viewport_width,
        } => {
            let outcome = state.window_manager.open(app_id, data, viewport_width);
            state.close_overlays();
            effects.push(RuntimeEffect::FocusWindowInput(outcome.window_id()));
        }
        DesktopAction::OpenAppByName {
            name,
            data,
            viewport_width,
        } => {
            let outcome = state
                .window_manager
                .open_by_name(&name, data, viewport_width)?;
            state.close_overlays();
            effects.push(RuntimeEffect::FocusWindowInput(outcome.window_id()));
        }
        DesktopAction::CloseWindow { window_id } => {
            ensure(state.window_manager.close(window_id), window_id)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            ensure(state.window_manager.focus(window_id), window_id)?;
            state.close_overlays();
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::MinimizeWindow { window_id } => {
            ensure(state.window_manager.minimize(window_id), window_id)?;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            ensure(state.window_manager.toggle_maximize(window_id), window_id)?;
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            ensure(
                state
                    .window_manager
                    .move_window(window_id, position.x, position.y),
                window_id,
            )?;
        }
        DesktopAction::ResizeWindow { window_id, size } => {
            ensure(
                state
                    .window_manager
                    .resize(window_id, size.width, size.height),
                window_id,
            )?;
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let click = resolve_taskbar_click(&state.window_manager, window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            match click {
                TaskbarClick::Focus => {
                    effects = reduce_desktop(state, DesktopAction::FocusWindow { window_id })?;
                }
                TaskbarClick::Minimize => {
                    state.window_manager.minimize(window_id);
                }
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
            state.context_menu = None;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::OpenContextMenu { pointer, viewport } => {
            state.start_menu_open = false;
            state.context_menu = Some(ContextMenuAnchor::place(pointer, viewport));
        }
        DesktopAction::CloseOverlays => {
            state.close_overlays();
        }
        DesktopAction::ShowSystemProperties => {
            state.close_overlays();
            state.message_box = Some(MessageBox::info("System Properties", SYSTEM_PROPERTIES));
        }
        DesktopAction::Shutdown => {
            state.close_overlays();
            state.message_box = Some(MessageBox::info("Shut Down Windows", SHUTDOWN_NOTICE));
        }
        DesktopAction::RunCommand {
            window_id,
            command,
            viewport_width,
        } => {
            if state.window_manager.window(window_id).is_none() {
                return Err(ReducerError::WindowNotFound(window_id));
            }
            match resolve_run_command(&command) {
                RunResolution::Launch(app_id) => {
                    let outcome = state.window_manager.open(app_id, None, viewport_width);
                    state.window_manager.close(window_id);
                    effects.push(RuntimeEffect::FocusWindowInput(outcome.window_id()));
                }
                RunResolution::Fail(message) => {
                    state.message_box = Some(MessageBox::error("Run", message));
                }
                RunResolution::Ignore => {}
            }
        }
        DesktopAction::DismissMessageBox => {
            state.message_box = None;
        }
    }

    Ok(effects)
}

fn ensure(found: bool, window_id: WindowId) -> Result<(), ReducerError> {
    if found {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound(window_id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT_WIDTH: i32 = 1280;

    fn open(state: &mut DesktopState, app_id: AppId) -> WindowId {
        let effects = reduce_desktop(
            state,
            DesktopAction::OpenApp {
                app_id,
                data: None,
                viewport_width: VIEWPORT_WIDTH,
            },
        )
        .expect("open window");
        match effects.as_slice() {
            [RuntimeEffect::FocusWindowInput(id)] => *id,
            other => panic!("unexpected effects {other:?}"),
        }
    }

    fn run(state: &mut DesktopState, window_id: WindowId, command: &str) {
        reduce_desktop(
            state,
            DesktopAction::RunCommand {
                window_id,
                command: command.to_string(),
                viewport_width: VIEWPORT_WIDTH,
            },
        )
        .expect("run command");
    }

    #[test]
    fn opening_an_app_closes_the_start_menu() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        assert!(state.start_menu_open);

        let id = open(&mut state, AppId::Explorer);
        assert!(!state.start_menu_open);
        assert_eq!(state.window_manager.active_window_id(), Some(id));
    }

    #[test]
    fn unknown_window_reports_not_found_and_leaves_state() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Notepad);
        let before = state.clone();

        let missing = WindowId(77);
        for action in [
            DesktopAction::CloseWindow { window_id: missing },
            DesktopAction::FocusWindow { window_id: missing },
            DesktopAction::MinimizeWindow { window_id: missing },
            DesktopAction::ToggleMaximize { window_id: missing },
            DesktopAction::ToggleTaskbarWindow { window_id: missing },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, action),
                Err(ReducerError::WindowNotFound(missing))
            );
        }
        assert_eq!(state, before);
    }

    #[test]
    fn open_by_name_rejects_unknown_application() {
        let mut state = DesktopState::default();
        let result = reduce_desktop(
            &mut state,
            DesktopAction::OpenAppByName {
                name: "pinball".to_string(),
                data: None,
                viewport_width: VIEWPORT_WIDTH,
            },
        );
        assert!(matches!(result, Err(ReducerError::UnknownApplication(_))));
        assert!(state.window_manager.windows().is_empty());
    }

    #[test]
    fn boot_names_accept_run_dialog_aliases() {
        let mut state = DesktopState::default();
        for name in ["notepad", "calc", "explorer"] {
            reduce_desktop(
                &mut state,
                DesktopAction::OpenAppByName {
                    name: name.to_string(),
                    data: None,
                    viewport_width: VIEWPORT_WIDTH,
                },
            )
            .expect("open by name");
        }
        let opened: Vec<AppId> = state
            .window_manager
            .windows()
            .iter()
            .map(|w| w.app_id)
            .collect();
        assert_eq!(opened, vec![AppId::Notepad, AppId::Calculator, AppId::Explorer]);
    }

    #[test]
    fn taskbar_toggle_minimizes_if_active_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        let win = open(&mut state, AppId::Explorer);

        reduce_desktop(&mut state, DesktopAction::ToggleTaskbarWindow { window_id: win })
            .expect("minimize");
        assert!(state.window_manager.window(win).unwrap().minimized);
        assert_eq!(state.window_manager.active_window_id(), None);

        let effects =
            reduce_desktop(&mut state, DesktopAction::ToggleTaskbarWindow { window_id: win })
                .expect("restore");
        assert!(!state.window_manager.window(win).unwrap().minimized);
        assert_eq!(state.window_manager.active_window_id(), Some(win));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(win)]);
    }

    #[test]
    fn run_command_launches_target_and_closes_dialog() {
        let mut state = DesktopState::default();
        let run_id = open(&mut state, AppId::Run);

        run(&mut state, run_id, "calc");
        let apps: Vec<AppId> = state.window_manager.windows().iter().map(|w| w.app_id).collect();
        assert_eq!(apps, vec![AppId::Calculator]);
        assert_eq!(state.message_box, None);
    }

    #[test]
    fn failed_run_command_keeps_dialog_and_shows_message() {
        let mut state = DesktopState::default();
        let run_id = open(&mut state, AppId::Run);

        run(&mut state, run_id, "cmd");
        assert!(state.window_manager.window(run_id).is_some());
        assert_eq!(
            state.message_box,
            Some(MessageBox::error("Run", "Command Prompt not installed."))
        );

        reduce_desktop(&mut state, DesktopAction::DismissMessageBox).unwrap();
        assert_eq!(state.message_box, None);
    }

    #[test]
    fn blank_run_command_changes_nothing() {
        let mut state = DesktopState::default();
        let run_id = open(&mut state, AppId::Run);
        let before = state.clone();

        run(&mut state, run_id, "  ");
        assert_eq!(state, before);
    }

    #[test]
    fn context_menu_and_start_menu_are_exclusive() {
        let mut state = DesktopState::default();
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1024,
            h: 768,
        };
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenContextMenu {
                pointer: PointerPosition::new(1000, 700),
                viewport,
            },
        )
        .unwrap();
        assert!(!state.start_menu_open);
        assert_eq!(state.context_menu, Some(ContextMenuAnchor { x: 840, y: 500 }));

        reduce_desktop(&mut state, DesktopAction::ShowSystemProperties).unwrap();
        assert_eq!(state.context_menu, None);
        assert_eq!(
            state.message_box.as_ref().map(|m| m.title.as_str()),
            Some("System Properties")
        );
    }

    #[test]
    fn close_start_menu_is_idempotent() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        reduce_desktop(&mut state, DesktopAction::CloseStartMenu).unwrap();
        reduce_desktop(&mut state, DesktopAction::CloseStartMenu).unwrap();
        assert!(!state.start_menu_open);
    }

    #[test]
    fn shutdown_shows_safe_to_turn_off_notice() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        reduce_desktop(&mut state, DesktopAction::Shutdown).unwrap();

        assert!(!state.start_menu_open);
        assert_eq!(
            state.message_box.map(|m| m.body),
            Some("It is now safe to turn off your computer.".to_string())
        );
    }
}
