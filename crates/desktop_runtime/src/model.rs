use serde::{Deserialize, Serialize};

pub use desktop_app_contract::{AppId, LaunchData};

pub const DEFAULT_SMALL_SCREEN_WIDTH: i32 = 640;
pub const DEFAULT_TASKBAR_HEIGHT: i32 = 40;
pub const DEFAULT_CASCADE_ORIGIN: i32 = 50;
pub const DEFAULT_CASCADE_STEP: i32 = 20;
pub const DEFAULT_MIN_WINDOW_WIDTH: i32 = 100;
pub const DEFAULT_MIN_WINDOW_HEIGHT: i32 = 100;

const CONTEXT_MENU_WIDTH: i32 = 160;
const CONTEXT_MENU_HEIGHT: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

/// Axis-aligned rectangle in desktop pixels, used for viewport and context-menu geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub is_open: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub z_index: u32,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub data: Option<LaunchData>,
}

impl WindowRecord {
    /// Whether the frame layer paints this window. Minimized windows stay mounted but hidden.
    pub fn is_painted(&self) -> bool {
        self.is_open && !self.minimized
    }

    /// Inline CSS for the window frame.
    pub fn frame_style(&self, taskbar_height_px: i32) -> String {
        if self.maximized {
            format!(
                "left:0;top:0;width:100%;height:calc(100% - {taskbar_height_px}px);z-index:{};",
                self.z_index
            )
        } else {
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                self.position.x, self.position.y, self.size.width, self.size.height, self.z_index
            )
        }
    }
}

/// Tunables for window placement and shell chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Viewports narrower than this open new windows maximized.
    pub small_screen_width: i32,
    /// Height reserved for the taskbar at the bottom of the viewport.
    pub taskbar_height: i32,
    /// Top-left offset of the first cascaded window.
    pub cascade_origin: i32,
    /// Offset added per already-open window.
    pub cascade_step: i32,
    pub min_window_width: i32,
    pub min_window_height: i32,
    /// Logs window lifecycle and ignored actions to the console.
    pub debug_logging: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            small_screen_width: DEFAULT_SMALL_SCREEN_WIDTH,
            taskbar_height: DEFAULT_TASKBAR_HEIGHT,
            cascade_origin: DEFAULT_CASCADE_ORIGIN,
            cascade_step: DEFAULT_CASCADE_STEP,
            min_window_width: DEFAULT_MIN_WINDOW_WIDTH,
            min_window_height: DEFAULT_MIN_WINDOW_HEIGHT,
            debug_logging: false,
        }
    }
}

impl DesktopConfig {
    /// Parses a JSON config object; missing keys fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Resize handles exposed by a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    East,
    South,
    SouthEast,
}

impl ResizeEdge {
    pub fn engages_east(self) -> bool {
        matches!(self, Self::East | Self::SouthEast)
    }

    pub fn engages_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::East => "edge-e",
            Self::South => "edge-s",
            Self::SouthEast => "edge-se",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Modal message shown over the desktop until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    pub title: String,
    pub body: String,
    pub kind: MessageKind,
}

impl MessageBox {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: MessageKind::Info,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind: MessageKind::Error,
        }
    }
}

/// Top-left corner of the open desktop context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenuAnchor {
    pub x: i32,
    pub y: i32,
}

impl ContextMenuAnchor {
    /// Anchors the menu at `pointer`, flipping left/up when it would overflow `viewport`.
    pub fn place(pointer: PointerPosition, viewport: WindowRect) -> Self {
        let x = if pointer.x + CONTEXT_MENU_WIDTH > viewport.x + viewport.w {
            pointer.x - CONTEXT_MENU_WIDTH
        } else {
            pointer.x
        };
        let y = if pointer.y + CONTEXT_MENU_HEIGHT > viewport.y + viewport.h {
            pointer.y - CONTEXT_MENU_HEIGHT
        } else {
            pointer.y
        };
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(maximized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId(1),
            app_id: AppId::Notepad,
            title: "Untitled - Notepad".to_string(),
            is_open: true,
            minimized: false,
            maximized,
            z_index: 4,
            position: WindowPosition::new(50, 70),
            size: WindowSize::new(400, 300),
            data: None,
        }
    }

    #[test]
    fn minimized_windows_are_not_painted() {
        let mut window = record(false);
        assert!(window.is_painted());
        window.minimized = true;
        assert!(!window.is_painted());
    }

    #[test]
    fn frame_style_reserves_taskbar_height_when_maximized() {
        assert_eq!(
            record(true).frame_style(40),
            "left:0;top:0;width:100%;height:calc(100% - 40px);z-index:4;"
        );
        assert_eq!(
            record(false).frame_style(40),
            "left:50px;top:70px;width:400px;height:300px;z-index:4;"
        );
    }

    #[test]
    fn config_json_fills_missing_fields_from_defaults() {
        let config = DesktopConfig::from_json(r#"{ "small_screen_width": 800 }"#).unwrap();
        assert_eq!(config.small_screen_width, 800);
        assert_eq!(config.taskbar_height, DEFAULT_TASKBAR_HEIGHT);
        assert_eq!(config.min_window_width, DEFAULT_MIN_WINDOW_WIDTH);
        assert!(!config.debug_logging);
    }

    #[test]
    fn resize_edges_report_engaged_axes() {
        assert!(ResizeEdge::East.engages_east());
        assert!(!ResizeEdge::East.engages_south());
        assert!(ResizeEdge::South.engages_south());
        assert!(!ResizeEdge::South.engages_east());
        assert!(ResizeEdge::SouthEast.engages_east() && ResizeEdge::SouthEast.engages_south());
    }

    #[test]
    fn context_menu_flips_near_viewport_edges() {
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 800,
            h: 600,
        };
        assert_eq!(
            ContextMenuAnchor::place(PointerPosition::new(100, 100), viewport),
            ContextMenuAnchor { x: 100, y: 100 }
        );
        assert_eq!(
            ContextMenuAnchor::place(PointerPosition::new(700, 500), viewport),
            ContextMenuAnchor { x: 540, y: 300 }
        );
    }
}
