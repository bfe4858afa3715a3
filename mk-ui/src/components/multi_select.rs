//! Searchable multi-select checkbox list.

use dioxus::prelude::*;
use mk_model::OptionItem;

#[derive(Props, Clone, PartialEq)]
pub struct MultiSelectProps {
    pub label: String,
    /// Options left after the search box filter
    pub options: Vec<OptionItem>,
    /// Selected option keys
    pub selected: Vec<String>,
    pub query: String,
    #[props(default = false)]
    pub loading: bool,
    pub on_query: EventHandler<String>,
    pub on_toggle: EventHandler<String>,
    pub on_clear: EventHandler<()>,
}

#[component]
pub fn MultiSelect(props: MultiSelectProps) -> Element {
    let on_query = props.on_query;
    let on_toggle = props.on_toggle;
    let on_clear = props.on_clear;
    let selected_count = props.selected.len();
    let placeholder = format!("Search {}", props.label.to_lowercase());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 220px;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                strong { "{props.label}" }
                if selected_count > 0 {
                    span { style: "color: #1677ff; font-size: 12px;", "{selected_count} selected" }
                    button {
                        style: "font-size: 12px;",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{props.query}",
                oninput: move |evt: Event<FormData>| on_query.call(evt.value()),
            }
            div {
                style: "max-height: 160px; overflow-y: auto; border: 1px solid #d9d9d9; border-radius: 4px; padding: 4px 8px;",
                if props.loading {
                    div { style: "color: #666;", "Loading..." }
                } else if props.options.is_empty() {
                    div { style: "color: #999;", "No matches" }
                } else {
                    for item in props.options.iter() {
                        {
                            let key = item.key().to_string();
                            let checked = props.selected.contains(&key);
                            let label = if item.label.is_empty() { key.clone() } else { item.label.clone() };
                            rsx! {
                                label {
                                    key: "{key}",
                                    style: "display: block; cursor: pointer; white-space: nowrap;",
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onchange: move |_| on_toggle.call(key.clone()),
                                    }
                                    " {label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
