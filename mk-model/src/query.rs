//! Search criteria, paging and sorting for the record table.
//!
//! A [`RecordQuery`] is the full request the table controller sends to its
//! data service: the user's criteria, the page window, an optional column
//! sort and the status column filter. It serializes to the flat body the
//! review backend expects:
//!
//! ```json
//! {"title": "boiler", "status": "30", "FD_TEMPLATE_ID": "t1",
//!  "FD_NUMBER": "asc", "current": 2, "pageSize": 10}
//! ```

use crate::record::{ProcessStatus, Record};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Page sizes offered by the pagination bar.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Default page size for a fresh table.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// User-entered search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Substring of the record number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProcessStatus>,
    /// Template the page was opened for (`fdTmpId` URL parameter).
    #[serde(rename = "FD_TEMPLATE_ID", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl SearchCriteria {
    /// Trim text fields and turn blanks into `None`.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            title: clean(self.title),
            code: clean(self.code),
            status: self.status.filter(|s| !s.code().is_empty()),
            template_id: clean(self.template_id),
        }
    }

    /// True when no user criteria are set. The template id is page context,
    /// not a user criterion, so it is ignored here.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.code.is_none() && self.status.is_none()
    }

    /// Client-side match used when the backend hands back an unfiltered list.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(title) = &self.title {
            if !record.subject.to_lowercase().contains(&title.to_lowercase()) {
                return false;
            }
        }
        if let Some(code) = &self.code {
            if !record.number.contains(code.as_str()) {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if &record.status != status {
                return false;
            }
        }
        true
    }
}

/// Columns the table allows sorting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Number,
    CreatedAt,
    ModifiedAt,
}

impl SortColumn {
    /// Backend field name; also the key of the sort entry in the request body.
    pub fn field(self) -> &'static str {
        match self {
            Self::Number => "FD_NUMBER",
            Self::CreatedAt => "FD_CREATE_TIME",
            Self::ModifiedAt => "FD_LAST_MODIFIED_TIME",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub column: SortColumn,
    pub order: SortOrder,
}

/// Requested page window. `current` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub current: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl PageRequest {
    /// Build a page request, clamping both values to at least 1.
    pub fn new(current: u32, page_size: u32) -> Self {
        Self {
            current: current.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn first(page_size: u32) -> Self {
        Self::new(1, page_size)
    }

    /// Zero-based index of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.current.max(1) as usize - 1) * self.page_size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Everything a data service needs to produce one page of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordQuery {
    pub criteria: SearchCriteria,
    pub page: PageRequest,
    pub sort: Option<SortSpec>,
    /// Status column filter; empty means no filter.
    pub status_filter: Vec<ProcessStatus>,
}

impl RecordQuery {
    pub fn new(criteria: SearchCriteria, page: PageRequest) -> Self {
        Self {
            criteria,
            page,
            sort: None,
            status_filter: Vec::new(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.criteria.matches(record)
            && (self.status_filter.is_empty() || self.status_filter.contains(&record.status))
    }

    /// Filter an unpaged record list and cut out the requested page.
    ///
    /// The pagination total is the filtered count. Rows keep the order they
    /// arrived in; sorting is the data source's job.
    pub fn apply(&self, records: &[Record]) -> RecordPage {
        let filtered: Vec<&Record> = records.iter().filter(|r| self.matches(r)).collect();
        let total = filtered.len() as u64;
        let page_rows = filtered
            .into_iter()
            .skip(self.page.offset())
            .take(self.page.page_size as usize)
            .cloned()
            .collect();
        RecordPage {
            records: page_rows,
            pagination: Pagination::new(self.page, total),
        }
    }
}

impl Serialize for RecordQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let criteria = &self.criteria;
        if let Some(title) = &criteria.title {
            map.serialize_entry("title", title)?;
        }
        if let Some(code) = &criteria.code {
            map.serialize_entry("code", code)?;
        }
        if let Some(status) = &criteria.status {
            map.serialize_entry("status", status.code())?;
        }
        if let Some(template_id) = &criteria.template_id {
            map.serialize_entry("FD_TEMPLATE_ID", template_id)?;
        }
        if !self.status_filter.is_empty() {
            let codes: Vec<&str> = self.status_filter.iter().map(|s| s.code()).collect();
            map.serialize_entry("FD_PROCESS_STATUS", &codes)?;
        }
        if let Some(sort) = &self.sort {
            map.serialize_entry(sort.column.field(), sort.order.as_str())?;
        }
        map.serialize_entry("current", &self.page.current)?;
        map.serialize_entry("pageSize", &self.page.page_size)?;
        map.end()
    }
}

/// Pagination state after a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page: PageRequest, total: u64) -> Self {
        Self {
            current: page.current,
            page_size: page.page_size,
            total,
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.current, self.page_size)
    }

    /// Number of pages; at least 1 so an empty table still shows page 1.
    pub fn page_count(&self) -> u32 {
        let size = self.page_size.max(1) as u64;
        (self.total.div_ceil(size).max(1)).min(u32::MAX as u64) as u32
    }

    /// 1-based inclusive row range shown on the current page, if any.
    pub fn range(&self) -> Option<(u64, u64)> {
        let first = (self.current.max(1) as u64 - 1) * self.page_size as u64 + 1;
        if self.total == 0 || first > self.total {
            return None;
        }
        let last = (first + self.page_size as u64 - 1).min(self.total);
        Some((first, last))
    }

    /// "Items 11-20 of 25" style summary.
    pub fn summary(&self) -> String {
        match self.range() {
            Some((first, last)) => format!("Items {}-{} of {}", first, last, self.total),
            None => format!("{} items", self.total),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PageRequest::default(), 0)
    }
}

/// One page of records plus the pagination it was cut with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub pagination: Pagination,
}
