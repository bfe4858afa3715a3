//! Core types shared by the record table and the metrics dashboard.
//!
//! This crate provides:
//! - `record`: review records and their closed set of process status codes
//! - `query`: search criteria, paging, sorting and the paged result
//! - `filter`: dashboard filter snapshots and option lists
//! - `chart`: the dual-series chart bundle and its wire payload
//! - `envelope`: the `{status, data, msg}` response wrapper
//! - `fetch`: request tickets that keep stale responses from landing
//! - `notice`: user-facing notifications and the `Notifier` seam
//! - `catalog`: hazardous-chemicals catalog entries and keyword search
//! - `dates`: timestamp and date formatting helpers

pub mod catalog;
pub mod chart;
pub mod dates;
pub mod envelope;
pub mod fetch;
pub mod filter;
pub mod notice;
pub mod query;
pub mod record;

mod serde_util;

pub use chart::{ChartDataError, ChartSeriesBundle, MetricsPayload, SeriesSource};
pub use envelope::Envelope;
pub use fetch::{FetchSequence, FetchTicket};
pub use filter::{DateRange, FilterSnapshot, OptionItem};
pub use notice::{Notice, NoticeLevel, NoticeLog, Notifier};
pub use query::{
    PageRequest, Pagination, RecordPage, RecordQuery, SearchCriteria, SortColumn, SortOrder,
    SortSpec,
};
pub use record::{ProcessStatus, Record, RecordDraft};
