//! Read-only view of one record.

use super::{Modal, StatusTag};
use dioxus::prelude::*;
use mk_model::dates::format_timestamp;
use mk_model::Record;
use mk_table::review_link;

#[derive(Props, Clone, PartialEq)]
pub struct RecordDetailsProps {
    pub record: Record,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn RecordDetails(props: RecordDetailsProps) -> Element {
    let on_close = props.on_close;
    let record = &props.record;
    let link = review_link(&record.id);
    let created = format_timestamp(&record.created_at);
    let modified = format_timestamp(&record.modified_at);
    let description = record.description.clone().unwrap_or_else(|| "-".to_string());
    let subject = record.subject.clone();
    let number = record.number.clone();
    let status = record.status.clone();

    rsx! {
        Modal {
            title: "Record details",
            width: 600,
            on_close: move |_| on_close.call(()),
            dl {
                style: "display: grid; grid-template-columns: 120px 1fr; gap: 8px 16px; margin: 0;",
                dt { "Subject" }
                dd { style: "margin: 0;", "{subject}" }
                dt { "Code" }
                dd { style: "margin: 0;", "{number}" }
                dt { "Status" }
                dd { style: "margin: 0;", StatusTag { status: status } }
                dt { "Created" }
                dd { style: "margin: 0;", "{created}" }
                dt { "Modified" }
                dd { style: "margin: 0;", "{modified}" }
                dt { "Description" }
                dd { style: "margin: 0; white-space: pre-wrap;", "{description}" }
            }
            div {
                style: "display: flex; justify-content: space-between; margin-top: 20px;",
                a { href: "{link}", target: "_blank", rel: "noopener", "Open in review system" }
                button { onclick: move |_| on_close.call(()), "Close" }
            }
        }
    }
}
