//! Record table: sortable columns, status column filter, row selection and
//! per-row actions. Purely presentational; every change goes to a callback.

use super::{LoadingSpinner, StatusTag};
use dioxus::prelude::*;
use mk_model::dates::format_timestamp;
use mk_model::{ProcessStatus, Record, SortColumn, SortOrder, SortSpec};

/// Sort after clicking `column`: ascending, then descending, then unsorted.
pub fn next_sort(current: Option<SortSpec>, column: SortColumn) -> Option<SortSpec> {
    match current {
        Some(SortSpec { column: c, order: SortOrder::Asc }) if c == column => Some(SortSpec {
            column,
            order: SortOrder::Desc,
        }),
        Some(SortSpec { column: c, order: SortOrder::Desc }) if c == column => None,
        _ => Some(SortSpec {
            column,
            order: SortOrder::Asc,
        }),
    }
}

/// Status filter after clicking `status`.
pub fn toggle_status(filter: &[ProcessStatus], status: &ProcessStatus) -> Vec<ProcessStatus> {
    if filter.contains(status) {
        filter.iter().filter(|s| *s != status).cloned().collect()
    } else {
        let mut next = filter.to_vec();
        next.push(status.clone());
        next
    }
}

fn sort_marker(sort: Option<SortSpec>, column: SortColumn) -> &'static str {
    match sort {
        Some(SortSpec { column: c, order }) if c == column => match order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct RecordTableProps {
    pub records: Vec<Record>,
    #[props(default = false)]
    pub loading: bool,
    #[props(!optional)]
    pub sort: Option<SortSpec>,
    pub status_filter: Vec<ProcessStatus>,
    /// Ids of the selected rows on this page
    pub selected: Vec<String>,
    pub on_sort: EventHandler<Option<SortSpec>>,
    pub on_status_filter: EventHandler<Vec<ProcessStatus>>,
    pub on_toggle_row: EventHandler<String>,
    pub on_toggle_page: EventHandler<()>,
    pub on_view: EventHandler<Record>,
    pub on_edit: EventHandler<Record>,
    pub on_delete: EventHandler<Record>,
}

const CELL: &str = "padding: 8px 12px; border-bottom: 1px solid #f0f0f0; text-align: left;";
const HEAD: &str = "padding: 8px 12px; border-bottom: 1px solid #f0f0f0; text-align: left; background: #fafafa; white-space: nowrap;";

#[component]
pub fn RecordTable(props: RecordTableProps) -> Element {
    let sort = props.sort;
    let on_sort = props.on_sort;
    let on_status_filter = props.on_status_filter;
    let on_toggle_row = props.on_toggle_row;
    let on_toggle_page = props.on_toggle_page;
    let on_view = props.on_view;
    let on_edit = props.on_edit;
    let on_delete = props.on_delete;

    let page_selected = !props.records.is_empty()
        && props.records.iter().all(|r| props.selected.contains(&r.id));

    let sortable = move |column: SortColumn, title: &'static str| {
        let marker = sort_marker(sort, column);
        rsx! {
            th {
                style: "{HEAD} cursor: pointer;",
                onclick: move |_| on_sort.call(next_sort(sort, column)),
                "{title}{marker}"
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 6px; align-items: center; margin-bottom: 8px;",
            span { style: "color: #666;", "Status:" }
            for status in ProcessStatus::ALL.iter() {
                {
                    let active = props.status_filter.contains(status);
                    let next = toggle_status(&props.status_filter, status);
                    let label = status.label().to_string();
                    let style = if active {
                        "border: 1px solid #1677ff; color: #1677ff; background: #e6f4ff; border-radius: 12px; padding: 0 10px;"
                    } else {
                        "border: 1px solid #d9d9d9; border-radius: 12px; padding: 0 10px;"
                    };
                    rsx! {
                        button {
                            key: "{label}",
                            style: "{style}",
                            onclick: move |_| on_status_filter.call(next.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
        table {
            style: "width: 100%; border-collapse: collapse;",
            thead {
                tr {
                    th {
                        style: "{HEAD} width: 32px;",
                        input {
                            r#type: "checkbox",
                            checked: page_selected,
                            onchange: move |_| on_toggle_page.call(()),
                        }
                    }
                    {sortable(SortColumn::Number, "Code")}
                    th { style: "{HEAD}", "Subject" }
                    th { style: "{HEAD}", "Status" }
                    {sortable(SortColumn::CreatedAt, "Created")}
                    {sortable(SortColumn::ModifiedAt, "Modified")}
                    th { style: "{HEAD}", "Actions" }
                }
            }
            tbody {
                for record in props.records.iter() {
                    {
                        let id = record.id.clone();
                        let row_id = id.clone();
                        let checked = props.selected.contains(&id);
                        let created = format_timestamp(&record.created_at);
                        let modified = format_timestamp(&record.modified_at);
                        let number = record.number.clone();
                        let subject = record.subject.clone();
                        let status = record.status.clone();
                        let view = record.clone();
                        let view_link = record.clone();
                        let edit = record.clone();
                        let delete = record.clone();
                        rsx! {
                            tr {
                                key: "{id}",
                                td {
                                    style: "{CELL}",
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onchange: move |_| on_toggle_row.call(row_id.clone()),
                                    }
                                }
                                td { style: "{CELL}", "{number}" }
                                td {
                                    style: "{CELL}",
                                    a {
                                        href: "#",
                                        onclick: move |evt: Event<MouseData>| {
                                            evt.prevent_default();
                                            on_view.call(view_link.clone());
                                        },
                                        "{subject}"
                                    }
                                }
                                td { style: "{CELL}", StatusTag { status: status } }
                                td { style: "{CELL}", "{created}" }
                                td { style: "{CELL}", "{modified}" }
                                td {
                                    style: "{CELL} white-space: nowrap;",
                                    button { onclick: move |_| on_view.call(view.clone()), "View" }
                                    " "
                                    button { onclick: move |_| on_edit.call(edit.clone()), "Edit" }
                                    " "
                                    button {
                                        style: "color: #ff4d4f;",
                                        onclick: move |_| on_delete.call(delete.clone()),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if props.loading {
            LoadingSpinner {}
        } else if props.records.is_empty() {
            div { style: "padding: 24px; text-align: center; color: #999;", "No records" }
        }
    }
}
