use dioxus::prelude::*;

use store::{SortKey, TablePrefs, UserRecord};
use ui::{make_slot, make_store, use_app_state};

use crate::views::SiteNav;
use crate::Route;

#[component]
pub fn Users() -> Element {
    let state = use_app_state();
    let mut records = state.records;
    let mut editing = state.editing;
    let mut prefs = use_signal(|| TablePrefs::load(&make_slot()));
    let nav = use_navigator();

    // Clicking the active column flips direction, any other column sorts
    // ascending. Either way the choice is written back to its slot.
    let mut set_sort = move |key: SortKey| {
        let mut p = prefs.write();
        if p.sort == key {
            p.ascending = !p.ascending;
        } else {
            p.sort = key;
            p.ascending = true;
        }
        p.save(&make_slot());
    };

    let marker = move |key: SortKey| {
        let p = prefs.read();
        if p.sort != key {
            ""
        } else if p.ascending {
            " \u{25b2}"
        } else {
            " \u{25bc}"
        }
    };

    let mut rows: Vec<UserRecord> = records.read().clone();
    let p = *prefs.read();
    rows.sort_by(|a, b| {
        let ord = match p.sort {
            SortKey::Name => {
                let a_name = format!("{} {}", a.first_name, a.last_name).to_lowercase();
                let b_name = format!("{} {}", b.first_name, b.last_name).to_lowercase();
                a_name.cmp(&b_name)
            }
            SortKey::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            SortKey::Dob => a.dob.cmp(&b.dob),
        };
        if p.ascending {
            ord
        } else {
            ord.reverse()
        }
    });

    rsx! {
        SiteNav {}
        div { class: "page",
            h2 { "Registrations" }

            if rows.is_empty() {
                p { class: "empty-hint", "No registrations yet." }
            } else {
                table { class: "listing",
                    thead {
                        tr {
                            th { onclick: move |_| set_sort(SortKey::Name), "Name{marker(SortKey::Name)}" }
                            th { onclick: move |_| set_sort(SortKey::Email), "Email{marker(SortKey::Email)}" }
                            th { "Gender" }
                            th { onclick: move |_| set_sort(SortKey::Dob), "Date of Birth{marker(SortKey::Dob)}" }
                            th { "Profile Type" }
                            th { "Phone Numbers" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for record in rows {
                            tr { key: "{record.id}",
                                td { "{record.first_name} {record.last_name}" }
                                td { "{record.email}" }
                                td { "{record.gender.as_str()}" }
                                td { "{record.dob}" }
                                td { "{record.profile_type.as_str()}" }
                                td { {record.phone_numbers.join(", ")} }
                                td { class: "row-actions",
                                    button {
                                        onclick: {
                                            let record = record.clone();
                                            move |_| {
                                                editing.set(Some(record.clone()));
                                                nav.push(Route::Edit {});
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        onclick: {
                                            let id = record.id;
                                            move |_| {
                                                let mut repo = make_store();
                                                repo.clone_record(id);
                                                records.set(repo.records().to_vec());
                                            }
                                        },
                                        "Clone"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let id = record.id;
                                            move |_| {
                                                let mut repo = make_store();
                                                repo.remove(id);
                                                records.set(repo.records().to_vec());
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
