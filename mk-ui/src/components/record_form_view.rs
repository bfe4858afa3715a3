//! Add/edit form inside a [`Modal`].
//!
//! The component keeps a [`RecordForm`] for its whole lifetime, so callers
//! mount it when the dialog opens and drop it when it closes.

use super::Modal;
use dioxus::prelude::*;
use mk_model::{ProcessStatus, Record, RecordDraft};
use mk_table::{Field, RecordForm};

#[derive(Props, Clone, PartialEq)]
pub struct RecordFormViewProps {
    /// The record being edited; `None` adds a new one
    #[props(!optional)]
    pub record: Option<Record>,
    #[props(default = false)]
    pub saving: bool,
    pub on_submit: EventHandler<RecordDraft>,
    pub on_cancel: EventHandler<()>,
}

#[derive(Props, Clone, PartialEq)]
struct FieldRowProps {
    field: Field,
    #[props(!optional)]
    error: Option<&'static str>,
    children: Element,
}

#[component]
fn FieldRow(props: FieldRowProps) -> Element {
    let required = !matches!(props.field, Field::Description);
    let label = props.field.label();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; margin-bottom: 14px;",
            label {
                if required {
                    span { style: "color: #ff4d4f;", "* " }
                }
                "{label}"
            }
            {props.children}
            if let Some(error) = props.error {
                span { style: "color: #ff4d4f; font-size: 12px;", "{error}" }
            }
        }
    }
}

#[component]
pub fn RecordFormView(props: RecordFormViewProps) -> Element {
    let on_submit = props.on_submit;
    let on_cancel = props.on_cancel;
    let mut form = use_signal(|| RecordForm::open(props.record.as_ref()));

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let _ = form.write().submit(|draft| on_submit.call(draft));
    };

    let state = form.read();
    let mode = state.mode();
    let subject = state.subject().to_string();
    let number = state.number().to_string();
    let status_code = state.status_code().to_string();
    let description = state.description().to_string();
    let errors = state.errors().clone();
    drop(state);
    let title = mode.title();
    let submit_label = mode.submit_label();

    rsx! {
        Modal {
            title: title.to_string(),
            on_close: move |_| on_cancel.call(()),
            form {
                onsubmit: submit,
                FieldRow {
                    field: Field::Subject,
                    error: errors.get(Field::Subject),
                    input {
                        r#type: "text",
                        value: "{subject}",
                        oninput: move |evt: Event<FormData>| form.write().set_subject(evt.value()),
                    }
                }
                FieldRow {
                    field: Field::Number,
                    error: errors.get(Field::Number),
                    input {
                        r#type: "text",
                        value: "{number}",
                        oninput: move |evt: Event<FormData>| form.write().set_number(evt.value()),
                    }
                }
                FieldRow {
                    field: Field::Status,
                    error: errors.get(Field::Status),
                    select {
                        onchange: move |evt: Event<FormData>| form.write().set_status(&evt.value()),
                        option { value: "", selected: status_code.is_empty(), "Select a status" }
                        for s in ProcessStatus::ALL.iter() {
                            {
                                let code = s.code().to_string();
                                let label = s.label().to_string();
                                let selected = status_code == code;
                                rsx! {
                                    option { key: "{code}", value: "{code}", selected: selected, "{label}" }
                                }
                            }
                        }
                    }
                }
                FieldRow {
                    field: Field::Description,
                    error: errors.get(Field::Description),
                    textarea {
                        rows: "4",
                        value: "{description}",
                        oninput: move |evt: Event<FormData>| form.write().set_description(evt.value()),
                    }
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button {
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        style: "background: #1677ff; color: #fff; border: 1px solid #1677ff; border-radius: 4px; padding: 4px 15px;",
                        disabled: props.saving,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
