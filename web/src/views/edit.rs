use dioxus::prelude::*;

use store::{RecordDraft, UserRecord};
use ui::{make_store, use_app_state, RecordForm};

use crate::views::SiteNav;
use crate::Route;

#[component]
pub fn Edit() -> Element {
    let state = use_app_state();
    let mut records = state.records;
    let mut editing = state.editing;
    let nav = use_navigator();

    // Opened without a target, e.g. by typing the URL directly.
    let Some(record) = state.editing.read().clone() else {
        nav.replace(Route::Users {});
        return rsx! {};
    };

    let handle_submit = move |updated: UserRecord| {
        let mut repo = make_store();
        if !repo.update(updated) {
            tracing::warn!("edit target no longer exists");
        }
        records.set(repo.records().to_vec());
        editing.set(None);
        nav.push(Route::Users {});
    };

    rsx! {
        SiteNav {}
        div { class: "page",
            RecordForm {
                initial: RecordDraft::from_record(&record),
                heading: "Edit Registration",
                submit_label: "Save Changes",
                existing_id: record.id,
                on_submit: handle_submit,
            }
        }
    }
}
