//! Filter panel state.
//!
//! Edits accumulate locally and only leave the panel as a [`FilterSnapshot`]
//! when the user presses search or reset.

use log::warn;
use mk_gateway::GatewayError;
use mk_model::filter::{certificate_types, filter_options};
use mk_model::{DateRange, FilterSnapshot, Notice, Notifier, OptionItem};

/// The inputs a panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    TimeRange,
    Departments,
    Types,
    Courses,
}

/// Option lists fetched from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionSource {
    Departments,
    Courses,
}

impl OptionSource {
    fn failure_message(self) -> &'static str {
        match self {
            Self::Departments => "Failed to load departments",
            Self::Courses => "Failed to load courses",
        }
    }
}

/// A remote option list and whether it is still loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionList {
    pub items: Vec<OptionItem>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterPanel {
    fields: &'static [FilterField],
    draft: FilterSnapshot,
    departments: OptionList,
    courses: OptionList,
    types: Vec<OptionItem>,
    department_query: String,
    type_query: String,
    course_query: String,
}

impl FilterPanel {
    pub fn new(fields: &'static [FilterField]) -> Self {
        Self {
            fields,
            draft: FilterSnapshot::default(),
            departments: OptionList::default(),
            courses: OptionList::default(),
            types: certificate_types(),
            department_query: String::new(),
            type_query: String::new(),
            course_query: String::new(),
        }
    }

    pub fn has_field(&self, field: FilterField) -> bool {
        self.fields.contains(&field)
    }

    pub fn fields(&self) -> &'static [FilterField] {
        self.fields
    }

    // ── Option lists ────────────────────────────────────────────────

    pub fn begin_loading(&mut self, source: OptionSource) {
        self.list_mut(source).loading = true;
    }

    /// Store a fetched option list. A failure leaves the list empty and
    /// emits one warning.
    pub fn options_loaded<N: Notifier>(
        &mut self,
        source: OptionSource,
        result: Result<Vec<OptionItem>, GatewayError>,
        notifier: &N,
    ) {
        let list = self.list_mut(source);
        list.loading = false;
        match result {
            Ok(items) => list.items = items,
            Err(err) => {
                warn!("{}: {err}", source.failure_message());
                list.items.clear();
                notifier.notify(Notice::warning(source.failure_message()));
            }
        }
    }

    fn list_mut(&mut self, source: OptionSource) -> &mut OptionList {
        match source {
            OptionSource::Departments => &mut self.departments,
            OptionSource::Courses => &mut self.courses,
        }
    }

    pub fn options(&self, source: OptionSource) -> &OptionList {
        match source {
            OptionSource::Departments => &self.departments,
            OptionSource::Courses => &self.courses,
        }
    }

    pub fn visible_departments(&self) -> Vec<&OptionItem> {
        filter_options(&self.departments.items, &self.department_query)
    }

    pub fn visible_courses(&self) -> Vec<&OptionItem> {
        filter_options(&self.courses.items, &self.course_query)
    }

    pub fn visible_types(&self) -> Vec<&OptionItem> {
        filter_options(&self.types, &self.type_query)
    }

    pub fn set_department_query(&mut self, query: String) {
        self.department_query = query;
    }

    pub fn set_type_query(&mut self, query: String) {
        self.type_query = query;
    }

    pub fn set_course_query(&mut self, query: String) {
        self.course_query = query;
    }

    pub fn department_query(&self) -> &str {
        &self.department_query
    }

    pub fn type_query(&self) -> &str {
        &self.type_query
    }

    pub fn course_query(&self) -> &str {
        &self.course_query
    }

    // ── Selection ───────────────────────────────────────────────────

    pub fn set_time_range(&mut self, range: Option<DateRange>) {
        self.draft.time_range = range;
    }

    pub fn toggle_department(&mut self, id: &str) {
        toggle(&mut self.draft.departments, id);
    }

    pub fn toggle_type(&mut self, id: &str) {
        toggle(&mut self.draft.types, id);
    }

    pub fn toggle_course(&mut self, id: &str) {
        toggle(&mut self.draft.courses, id);
    }

    pub fn clear_departments(&mut self) {
        self.draft.departments.clear();
    }

    pub fn clear_types(&mut self) {
        self.draft.types.clear();
    }

    pub fn clear_courses(&mut self) {
        self.draft.courses.clear();
    }

    pub fn draft(&self) -> &FilterSnapshot {
        &self.draft
    }

    /// "Departments: 2 | Time range set", or `None` when nothing is selected.
    pub fn summary(&self) -> Option<String> {
        let parts = self.draft.summary();
        (!parts.is_empty()).then(|| parts.join(" | "))
    }

    // ── Submit ──────────────────────────────────────────────────────

    /// Emit the accumulated criteria.
    pub fn search<N: Notifier>(&self, notifier: &N) -> FilterSnapshot {
        notifier.notify(Notice::success("Query succeeded"));
        self.draft.clone()
    }

    /// Clear every selection and search box, and emit the empty snapshot.
    pub fn reset<N: Notifier>(&mut self, notifier: &N) -> FilterSnapshot {
        self.draft = FilterSnapshot::default();
        self.department_query.clear();
        self.type_query.clear();
        self.course_query.clear();
        notifier.notify(Notice::info("Filters reset"));
        FilterSnapshot::default()
    }
}

fn toggle(list: &mut Vec<String>, id: &str) {
    if let Some(pos) = list.iter().position(|v| v == id) {
        list.remove(pos);
    } else {
        list.push(id.to_string());
    }
}
