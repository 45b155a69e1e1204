use dioxus::prelude::*;

use store::{board, now_millis, TaskStatus};
use ui::use_app_state;

use crate::views::SiteNav;

#[component]
pub fn Board() -> Element {
    let state = use_app_state();
    let mut tasks = state.tasks;
    let mut title = use_signal(String::new);
    let mut dragging = use_signal(|| Option::<String>::None);

    let mut add = move || {
        let text = title.read().clone();
        if board::add_task(&mut tasks.write(), now_millis().to_string(), &text) {
            title.set(String::new());
        }
    };

    let snapshot = tasks.read().clone();

    rsx! {
        SiteNav {}
        div { class: "page",
            h2 { "Task Board" }

            div { class: "board-add",
                input {
                    r#type: "text",
                    placeholder: "New task",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            add();
                        }
                    },
                }
                button { class: "primary", onclick: move |_| add(), "Add" }
            }

            div { class: "board",
                for status in TaskStatus::ALL {
                    div {
                        class: "lane",
                        key: "{status.as_str()}",
                        ondragover: move |evt: DragEvent| evt.prevent_default(),
                        ondrop: move |evt: DragEvent| {
                            evt.prevent_default();
                            let Some(task_id) = dragging.read().clone() else {
                                return;
                            };
                            let source = tasks
                                .read()
                                .iter()
                                .find(|t| t.id == task_id)
                                .map(|t| t.status);
                            if let Some(source) = source {
                                board::apply_drag(&mut tasks.write(), &task_id, source, Some(status));
                            }
                            dragging.set(None);
                        },

                        h3 { "{status.label()}" }

                        for task in board::lane(&snapshot, status) {
                            div {
                                class: "task-card",
                                key: "{task.id}",
                                draggable: task.status != TaskStatus::Completed,
                                ondragstart: {
                                    let id = task.id.clone();
                                    move |_| dragging.set(Some(id.clone()))
                                },
                                ondragend: move |_| dragging.set(None),
                                "{task.title}"
                            }
                        }
                    }
                }
            }
        }
    }
}
