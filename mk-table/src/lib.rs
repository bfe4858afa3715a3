//! State and data access for the review record table.
//!
//! - [`TableController`] owns criteria, paging, sorting, the status filter,
//!   the loaded page, row selection and the delete confirmation.
//! - [`RecordForm`] is the add/edit form with required-field validation.
//! - [`RecordService`] is the injected data-access seam, implemented by
//!   [`GatewayRecordService`] (review backend) and [`StoreRecordService`]
//!   (in-memory SQLite demo store).
//!
//! Nothing here touches the DOM; the Dioxus views in `mk-ui` drive these
//! types from event handlers and spawned tasks.

mod controller;
mod form;
mod service;

pub use controller::{Fetch, TableChange, TableController};
pub use form::{Field, FieldErrors, FormMode, RecordForm};
pub use service::{
    GatewayRecordService, LocalFuture, RecordService, ServiceError, StoreRecordService,
    RECORD_SEARCH_PATH,
};

/// Link to a record in the review system.
pub fn review_link(record_id: &str) -> String {
    format!("/web/#/current/km-review/kmReviewMain/view/{record_id}?target=_blank")
}
