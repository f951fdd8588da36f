//! Window collection ownership and the window lifecycle/stacking operations.
//!
//! Every mutation goes through [`WindowManager`] so the stacking and focus invariants hold:
//! z-indices are consumed monotonically and never reused, at most one window is active, and a
//! minimized window is never the active one.

use desktop_app_contract::UnknownAppId;

use crate::{
    apps::app_descriptor,
    model::{AppId, DesktopConfig, LaunchData, WindowId, WindowPosition, WindowRecord, WindowSize},
    run_command::app_alias,
};

/// Result of an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new window was created and focused.
    Created(WindowId),
    /// A single-instance app was already open; the existing window was focused instead.
    Focused(WindowId),
}

impl OpenOutcome {
    pub fn window_id(self) -> WindowId {
        match self {
            Self::Created(id) | Self::Focused(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    windows: Vec<WindowRecord>,
    active_window_id: Option<WindowId>,
    next_z_index: u32,
    next_window_id: u64,
    config: DesktopConfig,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl WindowManager {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            active_window_id: None,
            next_z_index: 1,
            next_window_id: 1,
            config,
        }
    }

    /// Tracked windows in insertion order. Stacking is given by `z_index`, not position here.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active_window_id
    }

    pub fn next_z_index(&self) -> u32 {
        self.next_z_index
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.active_window_id == Some(id)
    }

    /// Opens a window for `app_id`, or focuses the open instance of a single-instance app.
    pub fn open(
        &mut self,
        app_id: AppId,
        data: Option<LaunchData>,
        viewport_width: i32,
    ) -> OpenOutcome {
        let descriptor = app_descriptor(app_id);
        if descriptor.single_instance {
            if let Some(existing) = self.windows.iter().find(|w| w.app_id == app_id).map(|w| w.id)
            {
                self.focus(existing);
                return OpenOutcome::Focused(existing);
            }
        }

        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;

        let offset =
            self.config.cascade_origin + self.config.cascade_step * self.windows.len() as i32;
        let maximized = descriptor.maximizable && viewport_width < self.config.small_screen_width;
        let z_index = self.take_z_index();

        self.windows.push(WindowRecord {
            id,
            app_id,
            title: descriptor.title.to_string(),
            is_open: true,
            minimized: false,
            maximized,
            z_index,
            position: WindowPosition::new(offset, offset),
            size: descriptor.default_size,
            data,
        });
        self.active_window_id = Some(id);
        OpenOutcome::Created(id)
    }

    /// Parses `name` as an application id or run-dialog alias and opens it.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAppId`] without touching state when `name` is not a known application.
    pub fn open_by_name(
        &mut self,
        name: &str,
        data: Option<LaunchData>,
        viewport_width: i32,
    ) -> Result<OpenOutcome, UnknownAppId> {
        let app_id = match name.parse::<AppId>() {
            Ok(app_id) => app_id,
            Err(err) => app_alias(name).ok_or(err)?,
        };
        Ok(self.open(app_id, data, viewport_width))
    }

    /// Removes the window. Focus does not move to another window.
    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            return false;
        }
        if self.active_window_id == Some(id) {
            self.active_window_id = None;
        }
        true
    }

    pub fn minimize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        window.minimized = true;
        // Minimizing leaves the desktop without an active window, whichever was active.
        self.active_window_id = None;
        true
    }

    /// Flips the maximized flag and focuses the window. Non-maximizable apps are left alone.
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if !app_descriptor(window.app_id).maximizable {
            return true;
        }
        window.maximized = !window.maximized;
        self.focus(id)
    }

    /// Raises the window above every other, restores it if minimized, and makes it active.
    pub fn focus(&mut self, id: WindowId) -> bool {
        if self.window(id).is_none() {
            return false;
        }
        let z_index = self.take_z_index();
        if let Some(window) = self.window_mut(id) {
            window.z_index = z_index;
            window.minimized = false;
        }
        self.active_window_id = Some(id);
        true
    }

    pub fn move_window(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        window.position = WindowPosition::new(x, y);
        true
    }

    /// Overwrites the window size, floored at the configured minimum.
    pub fn resize(&mut self, id: WindowId, width: i32, height: i32) -> bool {
        let (min_width, min_height) = (self.config.min_window_width, self.config.min_window_height);
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        window.size = WindowSize::new(width, height).clamped_min(min_width, min_height);
        true
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    fn take_z_index(&mut self) -> u32 {
        let z_index = self.next_z_index;
        self.next_z_index += 1;
        z_index
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DESKTOP_WIDTH: i32 = 1280;

    fn open(manager: &mut WindowManager, app_id: AppId) -> WindowId {
        manager.open(app_id, None, DESKTOP_WIDTH).window_id()
    }

    #[test]
    fn open_cascades_from_current_window_count() {
        let mut manager = WindowManager::default();
        let first = open(&mut manager, AppId::Notepad);
        let second = open(&mut manager, AppId::Calculator);

        let first = manager.window(first).unwrap();
        let second = manager.window(second).unwrap();
        assert_eq!(first.position, WindowPosition::new(50, 50));
        assert_eq!(second.position, WindowPosition::new(70, 70));
        assert_eq!(first.size, WindowSize::new(400, 300));
        assert_eq!(second.title, "Calculator");
        assert_eq!((first.z_index, second.z_index), (1, 2));
        assert_eq!(manager.active_window_id(), Some(second.id));
    }

    #[test]
    fn cascade_reuses_offsets_after_close() {
        let mut manager = WindowManager::default();
        let first = open(&mut manager, AppId::Notepad);
        open(&mut manager, AppId::Paint);
        manager.close(first);

        let third = open(&mut manager, AppId::Explorer);
        assert_eq!(manager.window(third).unwrap().position, WindowPosition::new(70, 70));
        assert_eq!(third, WindowId(3));
    }

    #[test]
    fn small_screens_open_maximized_except_for_run_dialog() {
        let mut manager = WindowManager::default();
        let notepad = manager.open(AppId::Notepad, None, 500).window_id();
        let run = manager.open(AppId::Run, None, 500).window_id();
        let wide = manager.open(AppId::Paint, None, 640).window_id();

        assert!(manager.window(notepad).unwrap().maximized);
        assert!(!manager.window(run).unwrap().maximized);
        assert!(!manager.window(wide).unwrap().maximized);
    }

    #[test]
    fn run_dialog_is_focused_instead_of_duplicated() {
        let mut manager = WindowManager::default();
        let run = manager.open(AppId::Run, None, DESKTOP_WIDTH);
        open(&mut manager, AppId::Notepad);
        let again = manager.open(AppId::Run, None, DESKTOP_WIDTH);

        assert_eq!(again, OpenOutcome::Focused(run.window_id()));
        assert_eq!(
            manager.windows().iter().filter(|w| w.app_id == AppId::Run).count(),
            1
        );
        assert_eq!(manager.active_window_id(), Some(run.window_id()));
        assert_eq!(manager.window(run.window_id()).unwrap().z_index, 3);
    }

    #[test]
    fn open_by_name_rejects_unknown_names_without_state_change() {
        let mut manager = WindowManager::default();
        let before = manager.clone();
        let err = manager.open_by_name("solitaire", None, DESKTOP_WIDTH).unwrap_err();
        assert_eq!(err, UnknownAppId("solitaire".to_string()));
        assert_eq!(manager, before);

        let opened = manager.open_by_name("Calculator", None, DESKTOP_WIDTH).unwrap();
        assert_eq!(manager.window(opened.window_id()).unwrap().app_id, AppId::Calculator);
    }

    #[test]
    fn open_by_name_accepts_run_dialog_aliases() {
        let mut manager = WindowManager::default();
        let calc = manager.open_by_name("calc", None, DESKTOP_WIDTH).unwrap();
        let paint = manager.open_by_name("mspaint", None, DESKTOP_WIDTH).unwrap();
        let browser = manager.open_by_name("web-browser", None, DESKTOP_WIDTH).unwrap();
        let opened: Vec<AppId> = [calc, paint, browser]
            .iter()
            .map(|outcome| manager.window(outcome.window_id()).unwrap().app_id)
            .collect();
        assert_eq!(opened, vec![AppId::Calculator, AppId::Paint, AppId::WebBrowser]);
        assert_eq!(
            manager.open_by_name("cmd", None, DESKTOP_WIDTH).unwrap_err(),
            UnknownAppId("cmd".to_string())
        );
    }

    #[test]
    fn minimize_clears_active_even_for_background_windows() {
        let mut manager = WindowManager::default();
        let background = open(&mut manager, AppId::Notepad);
        open(&mut manager, AppId::Calculator);

        assert!(manager.minimize(background));
        assert_eq!(manager.active_window_id(), None);
        assert!(manager.window(background).unwrap().minimized);
    }

    #[test]
    fn minimize_of_unknown_window_keeps_active_reference() {
        let mut manager = WindowManager::default();
        let active = open(&mut manager, AppId::Notepad);

        assert!(!manager.minimize(WindowId(99)));
        assert_eq!(manager.active_window_id(), Some(active));
    }

    #[test]
    fn focus_restores_and_raises() {
        let mut manager = WindowManager::default();
        let first = open(&mut manager, AppId::Notepad);
        open(&mut manager, AppId::Calculator);
        manager.minimize(first);

        assert!(manager.focus(first));
        let record = manager.window(first).unwrap();
        assert!(!record.minimized);
        assert_eq!(record.z_index, 3);
        assert_eq!(manager.next_z_index(), 4);
        assert_eq!(manager.active_window_id(), Some(first));
    }

    #[test]
    fn toggle_maximize_focuses_and_skips_run_dialog() {
        let mut manager = WindowManager::default();
        let notepad = open(&mut manager, AppId::Notepad);
        let run = open(&mut manager, AppId::Run);

        manager.toggle_maximize(notepad);
        assert!(manager.window(notepad).unwrap().maximized);
        assert_eq!(manager.active_window_id(), Some(notepad));

        let z_before = manager.next_z_index();
        manager.toggle_maximize(run);
        assert!(!manager.window(run).unwrap().maximized);
        assert_eq!(manager.next_z_index(), z_before);
    }

    #[test]
    fn close_clears_active_only_for_the_closed_window() {
        let mut manager = WindowManager::default();
        let first = open(&mut manager, AppId::Notepad);
        let second = open(&mut manager, AppId::Calculator);

        manager.close(first);
        assert_eq!(manager.active_window_id(), Some(second));
        manager.close(second);
        assert_eq!(manager.active_window_id(), None);
        assert!(!manager.close(second));
    }

    #[test]
    fn move_is_unclamped_and_resize_is_floored() {
        let mut manager = WindowManager::default();
        let id = open(&mut manager, AppId::Paint);

        manager.move_window(id, -300, -20);
        manager.resize(id, 40, 250);
        let record = manager.window(id).unwrap();
        assert_eq!(record.position, WindowPosition::new(-300, -20));
        assert_eq!(record.size, WindowSize::new(100, 250));
    }

    #[test]
    fn resize_floor_follows_config() {
        let config = DesktopConfig {
            min_window_width: 180,
            min_window_height: 120,
            ..DesktopConfig::default()
        };
        let mut manager = WindowManager::new(config);
        let id = open(&mut manager, AppId::Notepad);

        manager.resize(id, 10, 10);
        assert_eq!(manager.window(id).unwrap().size, WindowSize::new(180, 120));
    }
}
