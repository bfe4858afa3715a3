//! Search/table controller.
//!
//! The controller is a plain state machine. Every operation that needs data
//! returns a [`Fetch`] (ticket + query); the caller runs the query against a
//! [`RecordService`](crate::RecordService) and hands the outcome back to
//! [`TableController::complete`]. Results for superseded tickets are dropped.

use crate::ServiceError;
use log::{debug, warn};
use mk_model::{
    FetchSequence, FetchTicket, Notice, Notifier, PageRequest, Pagination, ProcessStatus, Record,
    RecordPage, RecordQuery, SearchCriteria, SortSpec,
};
use std::collections::BTreeSet;

/// A query to run, stamped with the ticket that may apply its result.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetch {
    pub ticket: FetchTicket,
    pub query: RecordQuery,
}

/// Page, sort and column-filter state reported by the table widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableChange {
    pub page: PageRequest,
    pub sort: Option<SortSpec>,
    pub status_filter: Vec<ProcessStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableController {
    template_id: Option<String>,
    criteria: SearchCriteria,
    page: PageRequest,
    sort: Option<SortSpec>,
    status_filter: Vec<ProcessStatus>,
    records: Vec<Record>,
    pagination: Pagination,
    loading: bool,
    sequence: FetchSequence,
    /// Query of the latest issued fetch.
    requested: Option<RecordQuery>,
    /// Query whose result is on screen.
    shown: Option<RecordQuery>,
    pending_delete: Option<Record>,
    deleting: bool,
    selected: BTreeSet<String>,
}

impl TableController {
    /// A controller for the given template (the page's `fdTmpId`).
    pub fn new(template_id: Option<String>) -> Self {
        let template_id = template_id.filter(|t| !t.trim().is_empty());
        Self {
            criteria: SearchCriteria {
                template_id: template_id.clone(),
                ..Default::default()
            },
            template_id,
            page: PageRequest::default(),
            sort: None,
            status_filter: Vec::new(),
            records: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
            sequence: FetchSequence::new(),
            requested: None,
            shown: None,
            pending_delete: None,
            deleting: false,
            selected: BTreeSet::new(),
        }
    }

    // ── Fetch lifecycle ─────────────────────────────────────────────

    /// Store new criteria and go back to page 1.
    pub fn search(&mut self, criteria: SearchCriteria) -> Fetch {
        self.criteria = SearchCriteria {
            template_id: self.template_id.clone(),
            ..criteria
        }
        .normalized();
        self.page = PageRequest::first(self.page.page_size);
        self.issue()
    }

    /// Clear criteria, sort and column filter; keep the page size.
    pub fn reset(&mut self) -> Fetch {
        self.criteria = SearchCriteria {
            template_id: self.template_id.clone(),
            ..Default::default()
        };
        self.sort = None;
        self.status_filter.clear();
        self.page = PageRequest::first(self.page.page_size);
        self.issue()
    }

    /// Paging, sorting or column filtering changed in the table.
    pub fn on_table_change(&mut self, change: TableChange) -> Fetch {
        self.page = change.page;
        self.sort = change.sort;
        self.status_filter = change.status_filter;
        self.issue()
    }

    /// Re-run the current query.
    pub fn refresh(&mut self) -> Fetch {
        self.issue()
    }

    pub fn query(&self) -> RecordQuery {
        RecordQuery {
            criteria: self.criteria.clone(),
            page: self.page,
            sort: self.sort,
            status_filter: self.status_filter.clone(),
        }
    }

    fn issue(&mut self) -> Fetch {
        self.loading = true;
        let ticket = self.sequence.issue();
        debug!("issuing fetch #{}", ticket.id());
        let query = self.query();
        self.requested = Some(query.clone());
        Fetch { ticket, query }
    }

    /// Put criteria, page, sort and column filter back to the query whose
    /// rows are on screen.
    fn roll_back(&mut self) {
        if let Some(shown) = self.shown.clone() {
            debug!("rolling back to page {}", shown.page.current);
            self.criteria = shown.criteria;
            self.page = shown.page;
            self.sort = shown.sort;
            self.status_filter = shown.status_filter;
        }
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` and changes nothing when a newer fetch has been issued
    /// since. A failure leaves the previous rows and pagination in place,
    /// returns the request state to the query that produced them and emits
    /// exactly one notice.
    pub fn complete<N: Notifier>(
        &mut self,
        ticket: FetchTicket,
        result: Result<RecordPage, ServiceError>,
        notifier: &N,
    ) -> bool {
        if !self.sequence.is_current(ticket) {
            debug!("dropping stale fetch #{}", ticket.id());
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.records = page.records;
                self.pagination = page.pagination;
                self.shown = self.requested.take();
            }
            Err(err) => {
                warn!("record fetch failed: {err}");
                self.requested = None;
                self.roll_back();
                notifier.notify(err.notice());
            }
        }
        true
    }

    // ── Delete ──────────────────────────────────────────────────────

    pub fn request_delete(&mut self, record: Record) {
        self.pending_delete = Some(record);
    }

    pub fn pending_delete(&self) -> Option<&Record> {
        self.pending_delete.as_ref()
    }

    /// Confirmation text for the pending delete.
    pub fn delete_prompt(&self) -> Option<String> {
        self.pending_delete
            .as_ref()
            .map(|r| format!("Delete \"{}\"? This cannot be undone.", r.subject))
    }

    /// Dismiss the confirmation. Ignored while the delete is running.
    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// Start deleting the pending record and hand it back. The confirmation
    /// stays open until the delete succeeds or fails; a second confirm while
    /// one is running yields `None`.
    pub fn confirm_delete(&mut self) -> Option<Record> {
        if self.deleting {
            return None;
        }
        let record = self.pending_delete.clone()?;
        self.deleting = true;
        Some(record)
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn delete_succeeded<N: Notifier>(&mut self, id: &str, notifier: &N) -> Fetch {
        self.deleting = false;
        self.pending_delete = None;
        self.selected.remove(id);
        notifier.notify(Notice::success("Deleted"));
        self.refresh()
    }

    /// The confirmation closes; rows and selection are left as they were.
    pub fn delete_failed<N: Notifier>(&mut self, err: &ServiceError, notifier: &N) {
        warn!("delete failed: {err}");
        self.deleting = false;
        self.pending_delete = None;
        notifier.notify(Notice::error(format!(
            "Delete failed: {}",
            err.notice().message
        )));
    }

    // ── Save ────────────────────────────────────────────────────────

    pub fn save_succeeded<N: Notifier>(&mut self, created: bool, notifier: &N) -> Fetch {
        notifier.notify(Notice::success(if created { "Created" } else { "Updated" }));
        self.refresh()
    }

    pub fn save_failed<N: Notifier>(&mut self, err: &ServiceError, notifier: &N) {
        warn!("save failed: {err}");
        notifier.notify(err.notice());
    }

    // ── Selection ───────────────────────────────────────────────────

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every row on the current page, or clear them if all already are.
    pub fn toggle_page_selection(&mut self) {
        if self.page_fully_selected() {
            for record in &self.records {
                self.selected.remove(&record.id);
            }
        } else {
            self.selected
                .extend(self.records.iter().map(|r| r.id.clone()));
        }
    }

    pub fn page_fully_selected(&self) -> bool {
        !self.records.is_empty() && self.records.iter().all(|r| self.selected.contains(&r.id))
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selection_summary(&self) -> Option<String> {
        (!self.selected.is_empty()).then(|| format!("{} selected", self.selected.len()))
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn status_filter(&self) -> &[ProcessStatus] {
        &self.status_filter
    }

    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mk_gateway::GatewayError;
    use mk_model::{NoticeLevel, NoticeLog, SortColumn, SortOrder};

    fn record(i: usize) -> Record {
        Record {
            id: format!("item-{i}"),
            subject: format!("Test item {i}"),
            number: format!("CODE-{i:04}"),
            status: ProcessStatus::Draft,
            created_at: String::new(),
            modified_at: String::new(),
            description: None,
        }
    }

    fn all_records() -> Vec<Record> {
        (1..=25).map(record).collect()
    }

    fn network_failure() -> ServiceError {
        ServiceError::Gateway(GatewayError::Http {
            status: 500,
            msg: None,
        })
    }

    /// Run a fetch against an in-memory list, the way the remote service does.
    fn serve(fetch: &Fetch) -> Result<RecordPage, ServiceError> {
        Ok(fetch.query.apply(&all_records()))
    }

    #[test]
    fn initial_refresh_uses_template_and_default_page() {
        let mut table = TableController::new(Some("tmpl-1".into()));
        let fetch = table.refresh();
        assert!(table.is_loading());
        assert_eq!(fetch.query.criteria.template_id.as_deref(), Some("tmpl-1"));
        assert_eq!(fetch.query.page, PageRequest::new(1, 10));
    }

    #[test]
    fn blank_template_is_ignored() {
        let table = TableController::new(Some("  ".into()));
        assert_eq!(table.template_id(), None);
    }

    #[test]
    fn search_resets_to_first_page_and_keeps_template() {
        let mut table = TableController::new(Some("tmpl-1".into()));
        table.on_table_change(TableChange {
            page: PageRequest::new(3, 20),
            ..Default::default()
        });

        let fetch = table.search(SearchCriteria {
            title: Some(" boiler ".into()),
            template_id: Some("other".into()),
            ..Default::default()
        });
        assert_eq!(fetch.query.page, PageRequest::new(1, 20));
        assert_eq!(fetch.query.criteria.title.as_deref(), Some("boiler"));
        assert_eq!(fetch.query.criteria.template_id.as_deref(), Some("tmpl-1"));
    }

    #[test]
    fn successful_fetch_replaces_rows_and_pagination() {
        let log = NoticeLog::new();
        let mut table = TableController::new(None);
        let fetch = table.on_table_change(TableChange {
            page: PageRequest::new(2, 10),
            ..Default::default()
        });

        assert!(table.complete(fetch.ticket, serve(&fetch), &log));
        assert!(!table.is_loading());
        assert_eq!(table.records().len(), 10);
        assert_eq!(table.records()[0].id, "item-11");
        assert_eq!(table.pagination().total, 25);
        assert!(log.is_empty());
    }

    #[test]
    fn failure_emits_one_notice_and_keeps_previous_rows() {
        let log = NoticeLog::new();
        let mut table = TableController::new(None);
        let first = table.refresh();
        table.complete(first.ticket, serve(&first), &log);
        let before = (table.records().to_vec(), table.pagination());

        let second = table.on_table_change(TableChange {
            page: PageRequest::new(2, 10),
            ..Default::default()
        });
        assert!(table.complete(second.ticket, Err(network_failure()), &log));

        assert_eq!(log.len(), 1);
        assert_eq!(log.notices()[0].level, NoticeLevel::Error);
        assert_eq!(log.notices()[0].message, mk_gateway::MSG_SERVER);
        assert_eq!((table.records().to_vec(), table.pagination()), before);
        assert!(!table.is_loading());
    }

    #[test]
    fn stale_response_never_overwrites_newer_data() {
        let log = NoticeLog::new();
        let mut table = TableController::new(None);
        let slow = table.refresh();
        let fast = table.search(SearchCriteria {
            title: Some("Test item 2".into()),
            ..Default::default()
        });

        assert!(table.complete(fast.ticket, serve(&fast), &log));
        let newer = table.records().to_vec();
        assert!(!table.complete(slow.ticket, serve(&slow), &log));
        assert_eq!(table.records(), newer.as_slice());

        // a stale failure is dropped silently as well
        assert!(!table.complete(slow.ticket, Err(network_failure()), &log));
        assert!(log.is_empty());
    }

    #[test]
    fn loading_stays_on_until_latest_fetch_completes() {
        let log = NoticeLog::new();
        let mut table = TableController::new(None);
        let a = table.refresh();
        let b = table.refresh();
        table.complete(a.ticket, serve(&a), &log);
        assert!(table.is_loading());
        table.complete(b.ticket, serve(&b), &log);
        assert!(!table.is_loading());
    }

    #[test]
    fn table_change_passes_sort_and_filter_through() {
        let mut table = TableController::new(None);
        let sort = SortSpec {
            column: SortColumn::CreatedAt,
            order: SortOrder::Desc,
        };
        let fetch = table.on_table_change(TableChange {
            page: PageRequest::new(2, 50),
            sort: Some(sort),
            status_filter: vec![ProcessStatus::Pending],
        });
        assert_eq!(fetch.query.sort, Some(sort));
        assert_eq!(fetch.query.status_filter, vec![ProcessStatus::Pending]);

        let reset = table.reset();
        assert_eq!(reset.query.sort, None);
        assert!(reset.query.status_filter.is_empty());
        assert_eq!(reset.query.page, PageRequest::new(1, 50));
    }

    #[test]
    fn delete_confirmation_flow() {
        let log = NoticeLog::new();
        let mut table = TableController::new(None);
        table.toggle_selected("item-3");

        table.request_delete(record(3));
        assert_eq!(
            table.delete_prompt().as_deref(),
            Some("Delete \"Test item 3\"? This cannot be undone.")
        );
        table.cancel_delete();
        assert!(table.pending_delete().is_none());

        table.request_delete(record(3));
        let target = table.confirm_delete().unwrap();
        assert_eq!(target.id, "item-3");

        let refresh = table.delete_succeeded(&target.id, &log);
        assert!(table.pending_delete().is_none());
        assert!(!table.is_deleting());
        assert_eq!(log.notices(), vec![Notice::success("Deleted")]);
        assert_eq!(table.selected_count(), 0);
        assert!(table.sequence.is_current(refresh.ticket));
    }

    #[test]
    fn prompt_stays_open_until_delete_settles() {
        let mut table = TableController::new(None);
        table.request_delete(record(4));
        table.confirm_delete().unwrap();

        assert!(table.is_deleting());
        assert!(table.delete_prompt().is_some());
        assert_eq!(table.confirm_delete(), None, "second confirm while running");
        table.cancel_delete();
        assert_eq!(table.pending_delete().map(|r| r.id.as_str()), Some("item-4"));
    }

    #[test]
    fn delete_failure_emits_one_error() {
        let log = NoticeLog::new();
        let mut table = TableController::new(None);
        let fetch = table.refresh();
        table.complete(fetch.ticket, serve(&fetch), &log);
        table.toggle_selected("item-2");
        let before = (table.records().to_vec(), table.selected_count());

        table.request_delete(record(2));
        table.confirm_delete().unwrap();
        table.delete_failed(&network_failure(), &log);

        assert_eq!(log.len(), 1);
        assert_eq!(log.notices()[0].message, "Delete failed: Server error");
        assert!(table.pending_delete().is_none());
        assert!(!table.is_deleting());
        assert_eq!((table.records().to_vec(), table.selected_count()), before);
    }

    #[test]
    fn failed_fetch_rolls_back_to_shown_query() {
        let log = NoticeLog::new();
        let mut table = TableController::new(None);
        let first = table.on_table_change(TableChange {
            page: PageRequest::new(2, 10),
            ..Default::default()
        });
        table.complete(first.ticket, serve(&first), &log);

        let failed = table.on_table_change(TableChange {
            page: PageRequest::new(3, 10),
            sort: Some(SortSpec {
                column: SortColumn::Number,
                order: SortOrder::Asc,
            }),
            status_filter: vec![ProcessStatus::Ended],
        });
        table.complete(failed.ticket, Err(network_failure()), &log);

        assert_eq!(table.page(), PageRequest::new(2, 10));
        assert_eq!(table.sort(), None);
        assert!(table.status_filter().is_empty());
        assert_eq!(table.refresh().query, first.query);
    }

    #[test]
    fn selection_tracks_rows() {
        let log = NoticeLog::new();
        let mut table = TableController::new(None);
        let fetch = table.refresh();
        table.complete(fetch.ticket, serve(&fetch), &log);

        table.toggle_selected("item-1");
        table.toggle_selected("item-2");
        table.toggle_selected("item-1");
        assert_eq!(table.selection_summary().as_deref(), Some("1 selected"));
        assert!(table.is_selected("item-2"));

        table.toggle_page_selection();
        assert!(table.page_fully_selected());
        assert_eq!(table.selected_count(), 10);
        table.toggle_page_selection();
        assert_eq!(table.selection_summary(), None);
    }
}
