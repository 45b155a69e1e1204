//! Application state held in context.
//!
//! One provider at the composition root owns every cross-view signal: the
//! record list (hydrated from the store on startup), the board tasks
//! (session-only), and the record the edit view was navigated to with.

use dioxus::prelude::*;
use store::{Task, UserRecord};

#[derive(Clone, Copy)]
pub struct AppState {
    pub records: Signal<Vec<UserRecord>>,
    pub tasks: Signal<Vec<Task>>,
    /// Navigation context for the edit view; `None` means the view was
    /// opened without a target and must redirect to the listing.
    pub editing: Signal<Option<UserRecord>>,
}

/// Get the shared application state.
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

/// Provider component that owns the application state.
/// Wrap the router with this component at the composition root.
#[component]
pub fn StateProvider(children: Element) -> Element {
    let records = use_signal(|| {
        let records = crate::make_store().records().to_vec();
        tracing::debug!("hydrated {} records from storage", records.len());
        records
    });
    let tasks = use_signal(Vec::<Task>::new);
    let editing = use_signal(|| Option::<UserRecord>::None);

    use_context_provider(|| AppState {
        records,
        tasks,
        editing,
    });

    rsx! {
        {children}
    }
}
