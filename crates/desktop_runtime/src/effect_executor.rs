//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before running so effects that dispatch enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime
                .host
                .with_value(move |host| host.run_runtime_effect(effect));
        }
    });
}
