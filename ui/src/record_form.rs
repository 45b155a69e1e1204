//! The registration/edit form.
//!
//! One component serves both flows: the create view mounts it with a default
//! draft and no existing id, the edit view with a copy of the target record.
//! Document slots render from [`RecordDraft::visible_slots`] on every pass,
//! so changing the date of birth or marking a relative as married updates the
//! upload section immediately.

use dioxus::prelude::*;
use store::{now_millis, today, ListField, RecordDraft, UserRecord, ValidationErrors};

use crate::components::{FieldError, SelectField, TextField};

fn profile_options() -> Vec<(String, String)> {
    vec![
        ("personal".into(), "Personal".into()),
        ("business".into(), "Business".into()),
    ]
}

fn relationship_options() -> Vec<(String, String)> {
    vec![
        ("parent".into(), "Parent".into()),
        ("sibling".into(), "Sibling".into()),
        ("child".into(), "Child".into()),
        ("married".into(), "Married".into()),
    ]
}

#[component]
pub fn RecordForm(
    initial: RecordDraft,
    heading: String,
    submit_label: String,
    #[props(default)] existing_id: Option<u64>,
    #[props(default)] reset_on_submit: bool,
    on_submit: EventHandler<UserRecord>,
) -> Element {
    let mut draft = use_signal(move || initial.clone());
    let mut errors = use_signal(ValidationErrors::default);

    let snapshot = draft.read().clone();
    let err = move |path: &str| errors.read().get(path).map(String::from);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id = existing_id.unwrap_or_else(now_millis);
        let finished = draft.read().finish(id, today());
        match finished {
            Ok(record) => {
                errors.set(ValidationErrors::default());
                if reset_on_submit {
                    draft.set(RecordDraft::default());
                }
                on_submit.call(record);
            }
            Err(e) => errors.set(e),
        }
    };

    rsx! {
        form { class: "record-form", onsubmit: handle_submit,
            h2 { "{heading}" }

            div { class: "form-grid",
                TextField {
                    label: "First Name",
                    value: snapshot.first_name.clone(),
                    error: err("firstName"),
                    oninput: move |evt: FormEvent| draft.write().first_name = evt.value(),
                }
                TextField {
                    label: "Last Name",
                    value: snapshot.last_name.clone(),
                    error: err("lastName"),
                    oninput: move |evt: FormEvent| draft.write().last_name = evt.value(),
                }
                TextField {
                    label: "Email",
                    value: snapshot.email.clone(),
                    error: err("email"),
                    oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                }
                TextField {
                    label: "Password",
                    input_type: "password",
                    value: snapshot.password.clone(),
                    error: err("password"),
                    oninput: move |evt: FormEvent| draft.write().password = evt.value(),
                }
                TextField {
                    label: "Confirm Password",
                    input_type: "password",
                    value: snapshot.confirm_password.clone(),
                    error: err("confirmPassword"),
                    oninput: move |evt: FormEvent| draft.write().confirm_password = evt.value(),
                }
            }

            div { class: "form-field",
                label { "Gender" }
                div { class: "radio-row",
                    label {
                        input {
                            r#type: "radio",
                            name: "gender",
                            value: "male",
                            checked: snapshot.gender == "male",
                            onchange: move |_| draft.write().gender = "male".into(),
                        }
                        "Male"
                    }
                    label {
                        input {
                            r#type: "radio",
                            name: "gender",
                            value: "female",
                            checked: snapshot.gender == "female",
                            onchange: move |_| draft.write().gender = "female".into(),
                        }
                        "Female"
                    }
                }
                FieldError { message: err("gender") }
            }

            div { class: "form-grid",
                TextField {
                    label: "Date of Birth",
                    input_type: "date",
                    value: snapshot.dob.clone(),
                    error: err("dob"),
                    oninput: move |evt: FormEvent| draft.write().dob = evt.value(),
                }
                SelectField {
                    label: "Profile Type",
                    value: snapshot.profile_type.clone(),
                    options: profile_options(),
                    error: err("profileType"),
                    onchange: move |evt: FormEvent| draft.write().profile_type = evt.value(),
                }
            }

            h3 { "Phone Numbers" }
            for (i, phone) in snapshot.phone_numbers.iter().enumerate() {
                div { class: "list-row", key: "phone-{i}",
                    TextField {
                        label: "Phone Number",
                        placeholder: "Enter phone number",
                        value: phone.clone(),
                        error: err(&format!("phoneNumbers[{i}]")),
                        oninput: move |evt: FormEvent| draft.write().phone_numbers[i] = evt.value(),
                    }
                    button {
                        r#type: "button",
                        class: "icon",
                        disabled: snapshot.list_len(ListField::PhoneNumbers) == 1,
                        onclick: move |_| draft.write().remove(ListField::PhoneNumbers, i),
                        "\u{2212}"
                    }
                    button {
                        r#type: "button",
                        class: "icon",
                        onclick: move |_| draft.write().append(ListField::PhoneNumbers),
                        "+"
                    }
                }
            }

            h3 { "Addresses" }
            for (i, address) in snapshot.addresses.iter().enumerate() {
                div { class: "list-card", key: "address-{i}",
                    div { class: "form-grid",
                        TextField {
                            label: "Street",
                            value: address.street.clone(),
                            error: err(&format!("addresses[{i}].street")),
                            oninput: move |evt: FormEvent| draft.write().addresses[i].street = evt.value(),
                        }
                        TextField {
                            label: "City",
                            value: address.city.clone(),
                            error: err(&format!("addresses[{i}].city")),
                            oninput: move |evt: FormEvent| draft.write().addresses[i].city = evt.value(),
                        }
                        TextField {
                            label: "State",
                            value: address.state.clone(),
                            error: err(&format!("addresses[{i}].state")),
                            oninput: move |evt: FormEvent| draft.write().addresses[i].state = evt.value(),
                        }
                        TextField {
                            label: "ZIP Code",
                            value: address.zip.clone(),
                            error: err(&format!("addresses[{i}].zip")),
                            oninput: move |evt: FormEvent| draft.write().addresses[i].zip = evt.value(),
                        }
                    }
                    div { class: "list-actions",
                        button {
                            r#type: "button",
                            class: "icon",
                            disabled: snapshot.list_len(ListField::Addresses) == 1,
                            onclick: move |_| draft.write().remove(ListField::Addresses, i),
                            "\u{2212}"
                        }
                        button {
                            r#type: "button",
                            class: "icon",
                            onclick: move |_| draft.write().append(ListField::Addresses),
                            "+"
                        }
                    }
                }
            }

            h3 { "Relatives" }
            for (i, relative) in snapshot.relatives.iter().enumerate() {
                div { class: "list-card", key: "relative-{i}",
                    div { class: "form-grid",
                        TextField {
                            label: "Name",
                            value: relative.name.clone(),
                            error: err(&format!("relatives[{i}].name")),
                            oninput: move |evt: FormEvent| draft.write().relatives[i].name = evt.value(),
                        }
                        SelectField {
                            label: "Relationship",
                            value: relative.relationship.clone(),
                            options: relationship_options(),
                            error: err(&format!("relatives[{i}].relationship")),
                            onchange: move |evt: FormEvent| draft.write().relatives[i].relationship = evt.value(),
                        }
                        TextField {
                            label: "Age",
                            input_type: "number",
                            value: relative.age.clone(),
                            error: err(&format!("relatives[{i}].age")),
                            oninput: move |evt: FormEvent| draft.write().relatives[i].age = evt.value(),
                        }
                    }
                    div { class: "list-actions",
                        button {
                            r#type: "button",
                            class: "icon",
                            disabled: snapshot.list_len(ListField::Relatives) == 1,
                            onclick: move |_| draft.write().remove(ListField::Relatives, i),
                            "\u{2212}"
                        }
                        button {
                            r#type: "button",
                            class: "icon",
                            onclick: move |_| draft.write().append(ListField::Relatives),
                            "+"
                        }
                    }
                }
            }

            {
                let slots = snapshot.visible_slots(today());
                if slots.is_empty() {
                    rsx! {}
                } else {
                    rsx! {
                        h3 { "Documents" }
                        for slot in slots {
                            div { class: "form-field", key: "{slot.label()}",
                                label { "{slot.label()}" }
                                input {
                                    r#type: "file",
                                    accept: "image/*,.pdf",
                                    onchange: move |evt: FormEvent| {
                                        let name = evt
                                            .files()
                                            .and_then(|engine| engine.files().into_iter().next());
                                        draft.write().documents.set(slot, name);
                                    },
                                }
                                if let Some(name) = snapshot.documents.get(slot) {
                                    span { class: "file-name", "{name}" }
                                }
                            }
                        }
                    }
                }
            }

            button { r#type: "submit", class: "primary", "{submit_label}" }
        }
    }
}
