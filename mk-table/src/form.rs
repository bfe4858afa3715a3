//! Add/edit record form.

use mk_model::{ProcessStatus, Record, RecordDraft};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Subject,
    Number,
    Status,
    Description,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Subject => "Subject",
            Self::Number => "Code",
            Self::Status => "Status",
            Self::Description => "Description",
        }
    }
}

/// Per-field validation hints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, hint: &'static str) {
        self.0.insert(field, hint);
    }

    fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Add record",
            Self::Update => "Edit record",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
        }
    }
}

/// Controlled form state for one record.
///
/// Subject, code and status are required. [`RecordForm::submit`] only calls
/// its callback once all three are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordForm {
    editing: Option<Record>,
    subject: String,
    number: String,
    status: Option<ProcessStatus>,
    description: String,
    errors: FieldErrors,
}

impl RecordForm {
    /// Populate from `record`, or clear everything for a new one.
    pub fn open(record: Option<&Record>) -> Self {
        match record {
            Some(r) => Self {
                editing: Some(r.clone()),
                subject: r.subject.clone(),
                number: r.number.clone(),
                status: Some(r.status.clone()).filter(|s| !s.code().is_empty()),
                description: r.description.clone().unwrap_or_default(),
                errors: FieldErrors::default(),
            },
            None => Self::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Update
        } else {
            FormMode::Create
        }
    }

    /// The record being edited, if any.
    pub fn editing(&self) -> Option<&Record> {
        self.editing.as_ref()
    }

    pub fn set_subject(&mut self, value: String) {
        self.subject = value;
        self.errors.remove(Field::Subject);
    }

    pub fn set_number(&mut self, value: String) {
        self.number = value;
        self.errors.remove(Field::Number);
    }

    /// Set the status from a select value; an empty value clears it.
    pub fn set_status(&mut self, code: &str) {
        self.status = Some(code.trim())
            .filter(|c| !c.is_empty())
            .map(ProcessStatus::from_code);
        self.errors.remove(Field::Status);
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn status(&self) -> Option<&ProcessStatus> {
        self.status.as_ref()
    }

    /// Status code for the select element, `""` when unset.
    pub fn status_code(&self) -> &str {
        self.status.as_ref().map(|s| s.code()).unwrap_or("")
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn validate(&self) -> Result<RecordDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        let subject = self.subject.trim();
        let number = self.number.trim();
        if subject.is_empty() {
            errors.insert(Field::Subject, "Please enter a subject");
        }
        if number.is_empty() {
            errors.insert(Field::Number, "Please enter a code");
        }
        let status = match &self.status {
            Some(status) => status.clone(),
            None => {
                errors.insert(Field::Status, "Please select a status");
                return Err(errors);
            }
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        let description = self.description.trim();
        Ok(RecordDraft {
            subject: subject.to_string(),
            number: number.to_string(),
            status,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }

    /// Validate and, on success, pass the draft to `on_submit`.
    ///
    /// On failure the hints are kept on the form and also returned.
    pub fn submit<F: FnOnce(RecordDraft)>(&mut self, on_submit: F) -> Result<(), FieldErrors> {
        match self.validate() {
            Ok(draft) => {
                self.errors = FieldErrors::default();
                on_submit(draft);
                Ok(())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}
