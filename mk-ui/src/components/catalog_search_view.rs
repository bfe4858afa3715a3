//! Hazardous-chemicals catalog search box and result list.

use crate::state::ToastQueue;
use dioxus::prelude::*;
use mk_dashboard::{fetch_catalog, CatalogSearch};
use mk_gateway::Gateway;

#[component]
pub fn CatalogSearchView() -> Element {
    let gateway = use_context::<Gateway>();
    let toasts = use_context::<ToastQueue>();
    let mut catalog = use_signal(CatalogSearch::new);
    let mut input = use_signal(String::new);

    use_effect(move || {
        let gateway = gateway.clone();
        spawn(async move {
            let result = fetch_catalog(&gateway).await;
            catalog.write().loaded(result, &toasts);
        });
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        catalog.write().search(&input());
    };

    let state = catalog.read();
    let searched = state.has_searched();
    let results = state.results().to_vec();
    let summary = state.result_summary();
    let hint = state.no_results_hint();
    drop(state);

    rsx! {
        div {
            style: "margin-top: 24px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Hazardous chemicals" }
            form {
                style: "display: flex; gap: 8px;",
                onsubmit: on_submit,
                input {
                    r#type: "search",
                    style: "flex: 1; max-width: 420px;",
                    placeholder: "Chemical name",
                    value: "{input}",
                    oninput: move |evt: Event<FormData>| input.set(evt.value()),
                }
                button { r#type: "submit", "Search" }
            }
            if searched {
                if results.is_empty() {
                    p { style: "color: #999;", "{hint}" }
                } else {
                    p { style: "color: #666; font-size: 12px;", "{summary}" }
                    ul {
                        style: "list-style: none; padding: 0; margin: 0;",
                        for entry in results {
                            li {
                                key: "{entry.id}",
                                style: "padding: 8px 0; border-bottom: 1px solid #f0f0f0;",
                                a { href: "{entry.url}", target: "_blank", rel: "noopener", "{entry.title}" }
                                if !entry.name.is_empty() {
                                    span { style: "margin-left: 8px; color: #999;", "{entry.name}" }
                                }
                                p { style: "margin: 4px 0 0 0; color: #666;", "{entry.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
