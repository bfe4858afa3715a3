//! Search criteria form above the record table.

use dioxus::prelude::*;
use mk_model::{ProcessStatus, SearchCriteria};

#[derive(Props, Clone, PartialEq)]
pub struct SearchFormProps {
    #[props(default = false)]
    pub loading: bool,
    pub on_search: EventHandler<SearchCriteria>,
    pub on_reset: EventHandler<()>,
}

/// Criteria from the raw inputs. The template id is added by the controller.
fn criteria(title: String, code: String, status: String) -> SearchCriteria {
    SearchCriteria {
        title: Some(title),
        code: Some(code),
        status: (!status.is_empty()).then(|| ProcessStatus::from_code(&status)),
        template_id: None,
    }
    .normalized()
}

#[component]
pub fn SearchForm(props: SearchFormProps) -> Element {
    let on_search = props.on_search;
    let on_reset = props.on_reset;
    let mut title = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut status = use_signal(String::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        on_search.call(criteria(title(), code(), status()));
    };
    let on_clear = move |_| {
        title.set(String::new());
        code.set(String::new());
        status.set(String::new());
        on_reset.call(());
    };
    let current_status = status();

    rsx! {
        form {
            style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 16px;",
            onsubmit: on_submit,
            label {
                "Subject: "
                input {
                    r#type: "text",
                    placeholder: "Search by subject",
                    value: "{title}",
                    oninput: move |evt: Event<FormData>| title.set(evt.value()),
                }
            }
            label {
                "Code: "
                input {
                    r#type: "text",
                    placeholder: "Search by code",
                    value: "{code}",
                    oninput: move |evt: Event<FormData>| code.set(evt.value()),
                }
            }
            label {
                "Status: "
                select {
                    onchange: move |evt: Event<FormData>| status.set(evt.value()),
                    option { value: "", selected: current_status.is_empty(), "All" }
                    for s in ProcessStatus::ALL.iter() {
                        {
                            let code = s.code().to_string();
                            let label = s.label().to_string();
                            let selected = current_status == code;
                            rsx! {
                                option { key: "{code}", value: "{code}", selected: selected, "{label}" }
                            }
                        }
                    }
                }
            }
            button {
                r#type: "submit",
                style: "background: #1677ff; color: #fff; border: 1px solid #1677ff; border-radius: 4px; padding: 4px 15px;",
                disabled: props.loading,
                "Search"
            }
            button {
                r#type: "button",
                style: "border-radius: 4px; padding: 4px 15px;",
                onclick: on_clear,
                "Reset"
            }
        }
    }
}
