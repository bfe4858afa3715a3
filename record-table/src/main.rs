//! Review Record Table
//!
//! Lists the review records of one template (`?fdTmpId=...`) with a search
//! form, sortable and filterable columns, paging, and add/edit/view/delete
//! dialogs.
//!
//! Data flow:
//! 1. On mount the page picks its data service: the review backend behind
//!    the gateway, or with `?demo=1` the in-memory SQLite store seeded from
//!    the bundled demo CSV.
//! 2. Every user action goes through `TableController`, which hands back a
//!    ticketed `Fetch`. The fetch runs in a spawned task and its result is
//!    passed back to `complete()`, which ignores anything superseded.
//! 3. Failures never leave the page: each one becomes exactly one toast.

use dioxus::prelude::*;
use log::info;
use mk_gateway::Gateway;
use mk_model::{Notice, PageRequest, ProcessStatus, Record, RecordDraft, SearchCriteria, SortSpec};
use mk_store::Database;
use mk_table::{
    Fetch, GatewayRecordService, RecordService, StoreRecordService, TableChange, TableController,
};
use mk_ui::components::{
    ConfirmDialog, NoticeBanner, PaginationBar, RecordDetails, RecordFormView, RecordTable,
    SearchForm, ToastHost,
};
use mk_ui::page;
use mk_ui::state::ToastQueue;
use std::rc::Rc;

/// URL parameter naming the review template to list.
const TEMPLATE_PARAM: &str = "fdTmpId";
/// URL flag switching to the in-memory demo store.
const DEMO_PARAM: &str = "demo";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("record-table-root"))
        .launch(App);
}

fn build_service(template_id: Option<String>) -> Result<Rc<dyn RecordService>, Notice> {
    if page::flag(DEMO_PARAM) {
        let db = Database::with_demo_records()
            .map_err(|e| Notice::error(format!("Failed to load demo records: {e:#}")))?;
        info!("using the in-memory demo store");
        return Ok(Rc::new(StoreRecordService::new(db, template_id)));
    }
    let gateway =
        Gateway::new(&page::gateway_config()).map_err(|e| e.notice())?;
    info!("using the review backend at {}", gateway.base_url());
    Ok(Rc::new(GatewayRecordService::new(gateway)))
}

/// Which dialog is open.
#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Closed,
    Add,
    Edit(Record),
    View(Record),
}

/// Everything the event handlers need, as one `Copy` value.
#[derive(Clone, Copy)]
struct Actions {
    table: Signal<TableController>,
    service: Signal<Option<Rc<dyn RecordService>>>,
    dialog: Signal<Dialog>,
    saving: Signal<bool>,
    toasts: ToastQueue,
}

impl Actions {
    fn service(&self) -> Option<Rc<dyn RecordService>> {
        (*self.service.peek()).clone()
    }

    /// Run a fetch and apply its result (if it is still the latest).
    fn run(self, fetch: Fetch) {
        let Some(service) = self.service() else {
            return;
        };
        let mut table = self.table;
        let toasts = self.toasts;
        spawn(async move {
            let result = service.search(&fetch.query).await;
            table.write().complete(fetch.ticket, result, &toasts);
        });
    }

    fn search(self, criteria: SearchCriteria) {
        let mut table = self.table;
        let fetch = table.write().search(criteria);
        self.run(fetch);
    }

    fn reset(self) {
        let mut table = self.table;
        let fetch = table.write().reset();
        self.run(fetch);
    }

    fn change(self, change: TableChange) {
        let mut table = self.table;
        let fetch = table.write().on_table_change(change);
        self.run(fetch);
    }

    fn current_change(&self) -> TableChange {
        let table = self.table.read();
        TableChange {
            page: table.page(),
            sort: table.sort(),
            status_filter: table.status_filter().to_vec(),
        }
    }

    fn save(self, draft: RecordDraft) {
        let Some(service) = self.service() else {
            return;
        };
        let editing = match &*self.dialog.peek() {
            Dialog::Edit(record) => Some(record.clone()),
            _ => None,
        };
        let mut table = self.table;
        let mut dialog = self.dialog;
        let mut saving = self.saving;
        let toasts = self.toasts;
        saving.set(true);
        spawn(async move {
            let created = editing.is_none();
            let result = match editing {
                Some(mut record) => {
                    let modified_at = record.modified_at.clone();
                    record.apply_draft(draft, modified_at);
                    service.update(record).await
                }
                None => service.create(draft).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    dialog.set(Dialog::Closed);
                    let fetch = table.write().save_succeeded(created, &toasts);
                    self.run(fetch);
                }
                Err(err) => table.write().save_failed(&err, &toasts),
            }
        });
    }

    fn delete(self) {
        let Some(service) = self.service() else {
            return;
        };
        let mut table = self.table;
        let Some(record) = table.write().confirm_delete() else {
            return;
        };
        let toasts = self.toasts;
        spawn(async move {
            let result = service.delete(&record.id).await;
            match result {
                Ok(()) => {
                    let fetch = table.write().delete_succeeded(&record.id, &toasts);
                    self.run(fetch);
                }
                Err(err) => table.write().delete_failed(&err, &toasts),
            }
        });
    }
}

#[component]
fn App() -> Element {
    let toasts = use_context_provider(ToastQueue::new);
    let template_id = use_hook(|| page::query_param(TEMPLATE_PARAM));
    let table = use_signal({
        let template_id = template_id.clone();
        move || TableController::new(template_id)
    });
    let mut service = use_signal(|| None::<Rc<dyn RecordService>>);
    let mut startup_error = use_signal(|| None::<Notice>);
    let dialog = use_signal(|| Dialog::Closed);
    let saving = use_signal(|| false);

    let actions = Actions {
        table,
        service,
        dialog,
        saving,
        toasts,
    };

    // Pick the data service and load the first page on mount
    use_effect(move || match build_service(template_id.clone()) {
        Ok(svc) => {
            info!("record table ready ({})", svc.name());
            service.set(Some(svc));
            let mut table = actions.table;
            let fetch = table.write().refresh();
            actions.run(fetch);
        }
        Err(notice) => {
            log::error!("record table failed to start: {}", notice.message);
            startup_error.set(Some(notice));
        }
    });

    if let Some(notice) = startup_error() {
        return rsx! {
            div {
                style: "padding: 16px;",
                NoticeBanner {
                    notice: notice,
                    hint: "Reload the page, or open it with ?demo=1 to use the bundled records.".to_string(),
                }
            }
        };
    }

    let state = table.read();
    let records = state.records().to_vec();
    let loading = state.is_loading();
    let pagination = state.pagination();
    let sort = state.sort();
    let status_filter = state.status_filter().to_vec();
    let selected: Vec<String> = records
        .iter()
        .filter(|r| state.is_selected(&r.id))
        .map(|r| r.id.clone())
        .collect();
    let selection_summary = state.selection_summary();
    let delete_prompt = state.delete_prompt();
    let deleting = state.is_deleting();
    drop(state);

    let mut dialog_signal = dialog;
    let current_dialog = dialog();

    rsx! {
        ToastHost {}
        div {
            style: "padding: 16px; font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; font-size: 14px;",
            SearchForm {
                loading: loading,
                on_search: move |criteria: SearchCriteria| actions.search(criteria),
                on_reset: move |_| actions.reset(),
            }
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",
                button {
                    style: "background: #1677ff; color: #fff; border: 1px solid #1677ff; border-radius: 4px; padding: 4px 15px;",
                    onclick: move |_| dialog_signal.set(Dialog::Add),
                    "Add"
                }
                if let Some(summary) = selection_summary {
                    span { style: "color: #666;", "{summary}" }
                    button {
                        onclick: move |_| {
                            let mut table = actions.table;
                            table.write().clear_selection();
                        },
                        "Clear selection"
                    }
                }
            }
            RecordTable {
                records: records,
                loading: loading,
                sort: sort,
                status_filter: status_filter,
                selected: selected,
                on_sort: move |sort: Option<SortSpec>| {
                    let mut change = actions.current_change();
                    change.sort = sort;
                    actions.change(change);
                },
                on_status_filter: move |filter: Vec<ProcessStatus>| {
                    let mut change = actions.current_change();
                    change.status_filter = filter;
                    change.page = PageRequest::first(change.page.page_size);
                    actions.change(change);
                },
                on_toggle_row: move |id: String| {
                    let mut table = actions.table;
                    table.write().toggle_selected(&id);
                },
                on_toggle_page: move |_| {
                    let mut table = actions.table;
                    table.write().toggle_page_selection();
                },
                on_view: move |record: Record| dialog_signal.set(Dialog::View(record)),
                on_edit: move |record: Record| dialog_signal.set(Dialog::Edit(record)),
                on_delete: move |record: Record| {
                    let mut table = actions.table;
                    table.write().request_delete(record);
                },
            }
            PaginationBar {
                pagination: pagination,
                on_change: move |page: PageRequest| {
                    let mut change = actions.current_change();
                    change.page = page;
                    actions.change(change);
                },
            }
        }
        {
            match current_dialog {
                Dialog::Closed => rsx! {},
                Dialog::Add => rsx! {
                    RecordFormView {
                        record: None,
                        saving: saving(),
                        on_submit: move |draft: RecordDraft| actions.save(draft),
                        on_cancel: move |_| dialog_signal.set(Dialog::Closed),
                    }
                },
                Dialog::Edit(record) => rsx! {
                    RecordFormView {
                        record: Some(record),
                        saving: saving(),
                        on_submit: move |draft: RecordDraft| actions.save(draft),
                        on_cancel: move |_| dialog_signal.set(Dialog::Closed),
                    }
                },
                Dialog::View(record) => rsx! {
                    RecordDetails {
                        record: record,
                        on_close: move |_| dialog_signal.set(Dialog::Closed),
                    }
                },
            }
        }
        if let Some(message) = delete_prompt {
            ConfirmDialog {
                title: "Delete record",
                message: message,
                confirm_label: "Delete",
                busy: deleting,
                on_confirm: move |_| actions.delete(),
                on_cancel: move |_| {
                    let mut table = actions.table;
                    table.write().cancel_delete();
                },
            }
        }
    }
}
