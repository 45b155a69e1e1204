use dioxus::prelude::*;

use store::{RecordDraft, UserRecord};
use ui::{make_store, use_app_state, RecordForm};

use crate::views::SiteNav;

#[component]
pub fn Register() -> Element {
    let state = use_app_state();
    let mut records = state.records;

    let handle_submit = move |record: UserRecord| {
        let mut repo = make_store();
        let id = repo.add(record);
        tracing::info!("registered record {id}");
        records.set(repo.records().to_vec());
    };

    rsx! {
        SiteNav {}
        div { class: "page",
            RecordForm {
                initial: RecordDraft::default(),
                heading: "New Registration",
                submit_label: "Register",
                reset_on_submit: true,
                on_submit: handle_submit,
            }
        }
    }
}
