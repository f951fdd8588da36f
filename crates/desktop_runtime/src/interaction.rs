//! Per-window drag/resize gesture state machine.
//!
//! A [`GestureController`] turns pointer input on one window frame into reducer actions. It never
//! touches state directly; callers dispatch the returned [`DesktopAction`]s. While a gesture is
//! active the frame holds a [`GestureListeners`] guard for its window-level pointer listeners, and
//! dropping the guard detaches them.

use leptos::leptos_dom::helpers::WindowListenerHandle;

use crate::{
    model::{PointerPosition, ResizeEdge, WindowId, WindowPosition, WindowRecord, WindowSize},
    reducer::DesktopAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer position relative to the window origin at drag start.
        offset: PointerPosition,
    },
    Resizing {
        edge: ResizeEdge,
        pointer_start: PointerPosition,
        size_start: WindowSize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureController {
    window_id: WindowId,
    gesture: Gesture,
}

impl GestureController {
    pub fn new(window_id: WindowId) -> Self {
        Self {
            window_id,
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Pointer-down on the title bar: always focuses, and starts a drag unless maximized.
    pub fn title_bar_pointer_down(
        &mut self,
        window: &WindowRecord,
        pointer: PointerPosition,
    ) -> DesktopAction {
        if !window.maximized {
            self.gesture = Gesture::Dragging {
                offset: PointerPosition::new(
                    pointer.x - window.position.x,
                    pointer.y - window.position.y,
                ),
            };
        }
        DesktopAction::FocusWindow {
            window_id: self.window_id,
        }
    }

    /// Pointer-down on a resize handle. Maximized windows ignore it.
    pub fn resize_handle_pointer_down(
        &mut self,
        window: &WindowRecord,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> Option<DesktopAction> {
        if window.maximized {
            return None;
        }
        self.gesture = Gesture::Resizing {
            edge,
            pointer_start: pointer,
            size_start: window.size,
        };
        Some(DesktopAction::FocusWindow {
            window_id: self.window_id,
        })
    }

    pub fn pointer_move(&self, pointer: PointerPosition) -> Option<DesktopAction> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { offset } => Some(DesktopAction::MoveWindow {
                window_id: self.window_id,
                position: WindowPosition::new(pointer.x - offset.x, pointer.y - offset.y),
            }),
            Gesture::Resizing {
                edge,
                pointer_start,
                size_start,
            } => {
                let mut size = size_start;
                if edge.engages_east() {
                    size.width += pointer.x - pointer_start.x;
                }
                if edge.engages_south() {
                    size.height += pointer.y - pointer_start.y;
                }
                Some(DesktopAction::ResizeWindow {
                    window_id: self.window_id,
                    size,
                })
            }
        }
    }

    /// Ends any gesture. Returns whether one was active.
    pub fn pointer_up(&mut self) -> bool {
        let was_active = self.is_active();
        self.gesture = Gesture::Idle;
        was_active
    }
}

/// Window-level pointer listeners that live exactly as long as one gesture.
#[derive(Default)]
pub struct GestureListeners {
    handles: Vec<WindowListenerHandle>,
}

impl GestureListeners {
    pub fn new(handles: Vec<WindowListenerHandle>) -> Self {
        Self { handles }
    }
}

impl Drop for GestureListeners {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::AppId;

    fn window(position: WindowPosition, size: WindowSize, maximized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId(1),
            app_id: AppId::Paint,
            title: "untitled - Paint".to_string(),
            is_open: true,
            minimized: false,
            maximized,
            z_index: 1,
            position,
            size,
            data: None,
        }
    }

    #[test]
    fn drag_keeps_pointer_offset() {
        let record = window(WindowPosition::new(50, 50), WindowSize::new(400, 300), false);
        let mut controller = GestureController::new(record.id);

        let focus = controller.title_bar_pointer_down(&record, PointerPosition::new(60, 55));
        assert_eq!(focus, DesktopAction::FocusWindow { window_id: record.id });
        assert_eq!(
            controller.pointer_move(PointerPosition::new(90, 45)),
            Some(DesktopAction::MoveWindow {
                window_id: record.id,
                position: WindowPosition::new(80, 40),
            })
        );
        assert!(controller.pointer_up());
        assert_eq!(controller.pointer_move(PointerPosition::new(0, 0)), None);
    }

    #[test]
    fn maximized_title_bar_focuses_without_dragging() {
        let record = window(WindowPosition::new(50, 50), WindowSize::new(400, 300), true);
        let mut controller = GestureController::new(record.id);

        controller.title_bar_pointer_down(&record, PointerPosition::new(10, 10));
        assert_eq!(controller.gesture(), Gesture::Idle);
        assert_eq!(
            controller.resize_handle_pointer_down(
                &record,
                ResizeEdge::SouthEast,
                PointerPosition::new(10, 10)
            ),
            None
        );
        assert!(!controller.pointer_up());
    }

    #[test]
    fn south_edge_only_changes_height() {
        let record = window(WindowPosition::new(0, 0), WindowSize::new(300, 200), false);
        let mut controller = GestureController::new(record.id);

        controller.resize_handle_pointer_down(
            &record,
            ResizeEdge::South,
            PointerPosition::new(150, 200),
        );
        assert_eq!(
            controller.pointer_move(PointerPosition::new(190, 225)),
            Some(DesktopAction::ResizeWindow {
                window_id: record.id,
                size: WindowSize::new(300, 225),
            })
        );
    }

    #[test]
    fn corner_resize_is_relative_to_gesture_start() {
        let record = window(WindowPosition::new(0, 0), WindowSize::new(300, 200), false);
        let mut controller = GestureController::new(record.id);

        controller.resize_handle_pointer_down(
            &record,
            ResizeEdge::SouthEast,
            PointerPosition::new(300, 200),
        );
        controller.pointer_move(PointerPosition::new(320, 210));
        assert_eq!(
            controller.pointer_move(PointerPosition::new(250, 260)),
            Some(DesktopAction::ResizeWindow {
                window_id: record.id,
                size: WindowSize::new(250, 260),
            })
        );
    }
}
