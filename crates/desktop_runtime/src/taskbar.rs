//! Taskbar projection of the window collection.

use crate::{
    model::{AppId, WindowId},
    window_manager::WindowManager,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub active: bool,
    pub minimized: bool,
}

/// Outcome of clicking a taskbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarClick {
    Focus,
    Minimize,
}

/// One entry per tracked window, in collection order.
pub fn taskbar_entries(manager: &WindowManager) -> Vec<TaskbarEntry> {
    manager
        .windows()
        .iter()
        .map(|window| TaskbarEntry {
            window_id: window.id,
            app_id: window.app_id,
            title: window.title.clone(),
            active: manager.is_active(window.id) && !window.minimized,
            minimized: window.minimized,
        })
        .collect()
}

/// Focuses background or minimized windows and minimizes the active one.
///
/// Returns `None` for an untracked window.
pub fn resolve_taskbar_click(manager: &WindowManager, window_id: WindowId) -> Option<TaskbarClick> {
    let window = manager.window(window_id)?;
    if window.minimized || !manager.is_active(window_id) {
        Some(TaskbarClick::Focus)
    } else {
        Some(TaskbarClick::Minimize)
    }
}
