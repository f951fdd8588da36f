//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container and the runtime effect queue. UI composition
//! stays in [`crate::components`].

use std::rc::Rc;

use desktop_app_contract::ContentService;
use leptos::*;

use crate::{
    effect_executor,
    host::{DesktopHostContext, OfflineContentService},
    model::DesktopConfig,
    reducer::{reduce_desktop, DesktopAction, DesktopState, ReducerError, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Width used for small-screen auto-maximize decisions.
    pub fn viewport_width(&self) -> i32 {
        self.host.with_value(DesktopHostContext::viewport_width)
    }

    pub fn taskbar_height(&self) -> i32 {
        self.host.with_value(|host| host.config().taskbar_height)
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and opens any boot-time apps.
pub fn DesktopProvider(
    /// Window placement and chrome tunables; defaults apply when omitted.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    /// Content backend for the chat and browser apps; an offline stand-in when omitted.
    #[prop(optional)]
    content: Option<Rc<dyn ContentService>>,
    /// Application names to open once the shell is up, in order.
    #[prop(optional)]
    boot_apps: Vec<String>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let content = content.unwrap_or_else(|| Rc::new(OfflineContentService));
    let host = store_value(DesktopHostContext::new(content, config.clone()));
    let state = create_rw_signal(DesktopState::new(config));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();
        let debug_logging = desktop.window_manager.config().debug_logging;
        if debug_logging {
            logging::log!("desktop action: {action:?}");
        }

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err @ ReducerError::WindowNotFound(_)) => {
                if debug_logging {
                    logging::log!("ignored desktop action: {err}");
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    let viewport_width = runtime.viewport_width();
    for name in boot_apps {
        runtime.dispatch_action(DesktopAction::OpenAppByName {
            name,
            data: None,
            viewport_width,
        });
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
