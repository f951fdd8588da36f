//! Window-manager runtime for the retro desktop shell.
//!
//! [`window_manager::WindowManager`] owns the window collection, [`reducer::reduce_desktop`] is the
//! single transition entry point, and [`components`] renders the shell on top of both.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod interaction;
pub mod model;
pub mod reducer;
pub mod run_command;
mod runtime_context;
pub mod taskbar;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::{DesktopHostContext, OfflineContentService};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopState, ReducerError, RuntimeEffect};
pub use window_manager::{OpenOutcome, WindowManager};
