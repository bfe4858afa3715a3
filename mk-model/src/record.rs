//! Review records as returned by the review backend.

use crate::serde_util::null_default;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow stage of a review record.
///
/// The backend uses two-digit string codes. Codes outside the known set are
/// kept verbatim in `Unrecognized` so they survive a round trip and still
/// render (as the raw code with the default tag colour).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ProcessStatus {
    /// `00`
    Abandoned,
    /// `10`
    Draft,
    /// `11`
    Rejected,
    /// `20`
    Ended,
    /// `29`
    Abnormal,
    /// `30`
    Pending,
    Unrecognized(String),
}

impl ProcessStatus {
    /// Every recognized status, in the order the status filter lists them.
    pub const ALL: [ProcessStatus; 6] = [
        ProcessStatus::Abandoned,
        ProcessStatus::Draft,
        ProcessStatus::Ended,
        ProcessStatus::Pending,
        ProcessStatus::Rejected,
        ProcessStatus::Abnormal,
    ];

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "00" => Self::Abandoned,
            "10" => Self::Draft,
            "11" => Self::Rejected,
            "20" => Self::Ended,
            "29" => Self::Abnormal,
            "30" => Self::Pending,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Abandoned => "00",
            Self::Draft => "10",
            Self::Rejected => "11",
            Self::Ended => "20",
            Self::Abnormal => "29",
            Self::Pending => "30",
            Self::Unrecognized(code) => code,
        }
    }

    /// Display label; unknown codes fall back to the code itself.
    pub fn label(&self) -> &str {
        match self {
            Self::Abandoned => "Abandoned",
            Self::Draft => "Draft",
            Self::Rejected => "Rejected",
            Self::Ended => "Ended",
            Self::Abnormal => "Abnormal",
            Self::Pending => "Pending",
            Self::Unrecognized(code) => code,
        }
    }

    /// Tag tone used by the status column.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Abandoned | Self::Pending => "green",
            Self::Draft | Self::Rejected | Self::Abnormal => "red",
            Self::Ended => "orange",
            Self::Unrecognized(_) => "default",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Default for ProcessStatus {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<Option<String>> for ProcessStatus {
    fn from(code: Option<String>) -> Self {
        code.map(|c| Self::from_code(&c)).unwrap_or_default()
    }
}

impl From<ProcessStatus> for String {
    fn from(status: ProcessStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single review record (one row of the table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "FD_ID")]
    pub id: String,
    #[serde(rename = "FD_SUBJECT", default, deserialize_with = "null_default")]
    pub subject: String,
    #[serde(rename = "FD_NUMBER", default, deserialize_with = "null_default")]
    pub number: String,
    #[serde(rename = "FD_PROCESS_STATUS", default)]
    pub status: ProcessStatus,
    #[serde(rename = "FD_CREATE_TIME", default, deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(rename = "FD_LAST_MODIFIED_TIME", default, deserialize_with = "null_default")]
    pub modified_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record {
    /// Overwrite the editable fields from a validated draft.
    pub fn apply_draft(&mut self, draft: RecordDraft, modified_at: String) {
        self.subject = draft.subject;
        self.number = draft.number;
        self.status = draft.status;
        self.description = draft.description;
        self.modified_at = modified_at;
    }
}

/// The editable part of a record, as produced by a successful form submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDraft {
    #[serde(rename = "FD_SUBJECT")]
    pub subject: String,
    #[serde(rename = "FD_NUMBER")]
    pub number: String,
    #[serde(rename = "FD_PROCESS_STATUS")]
    pub status: ProcessStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecordDraft {
    /// Turn a draft into a brand-new record.
    pub fn into_record(self, id: String, now: String) -> Record {
        Record {
            id,
            subject: self.subject,
            number: self.number,
            status: self.status,
            created_at: now.clone(),
            modified_at: now,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_codes_map_to_variants() {
        for status in ProcessStatus::ALL.iter() {
            assert_eq!(&ProcessStatus::from_code(status.code()), status);
            assert!(status.is_recognized());
        }
        assert_eq!(ProcessStatus::from_code("11"), ProcessStatus::Rejected);
        assert_eq!(ProcessStatus::Ended.label(), "Ended");
        assert_eq!(ProcessStatus::Ended.tone(), "orange");
    }

    #[test]
    fn unknown_code_degrades_to_raw_label() {
        let status = ProcessStatus::from_code("42");
        assert_eq!(status, ProcessStatus::Unrecognized("42".to_string()));
        assert_eq!(status.label(), "42");
        assert_eq!(status.tone(), "default");
        assert!(!status.is_recognized());
    }

    #[test]
    fn record_deserializes_from_backend_row() {
        let row = json!({
            "FD_ID": "1a2b",
            "FD_SUBJECT": "Boiler inspection",
            "FD_NUMBER": "CODE-0001",
            "FD_PROCESS_STATUS": "30",
            "FD_CREATE_TIME": "2024-01-02 10:00:00",
            "FD_LAST_MODIFIED_TIME": "2024-01-03 11:00:00"
        });
        let record: Record = serde_json::from_value(row).unwrap();
        assert_eq!(record.id, "1a2b");
        assert_eq!(record.status, ProcessStatus::Pending);
        assert_eq!(record.description, None);
    }

    #[test]
    fn record_tolerates_nulls_and_unknown_status() {
        let row = json!({
            "FD_ID": "x",
            "FD_SUBJECT": null,
            "FD_NUMBER": "N-1",
            "FD_PROCESS_STATUS": "77",
            "FD_CREATE_TIME": null,
        });
        let record: Record = serde_json::from_value(row).unwrap();
        assert_eq!(record.subject, "");
        assert_eq!(record.created_at, "");
        assert_eq!(record.status.label(), "77");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["FD_PROCESS_STATUS"], "77");
    }

    #[test]
    fn null_status_is_unrecognized_empty() {
        let row = json!({"FD_ID": "x", "FD_PROCESS_STATUS": null});
        let record: Record = serde_json::from_value(row).unwrap();
        assert_eq!(record.status, ProcessStatus::Unrecognized(String::new()));
    }

    #[test]
    fn apply_draft_keeps_identity_and_creation_time() {
        let mut record = RecordDraft {
            subject: "Old".into(),
            number: "N-1".into(),
            status: ProcessStatus::Draft,
            description: None,
        }
        .into_record("id-1".into(), "2024-01-01 00:00:00".into());

        record.apply_draft(
            RecordDraft {
                subject: "New".into(),
                number: "N-2".into(),
                status: ProcessStatus::Ended,
                description: Some("done".into()),
            },
            "2024-02-01 00:00:00".into(),
        );

        assert_eq!(record.id, "id-1");
        assert_eq!(record.created_at, "2024-01-01 00:00:00");
        assert_eq!(record.modified_at, "2024-02-01 00:00:00");
        assert_eq!(record.subject, "New");
        assert_eq!(record.status, ProcessStatus::Ended);
    }
}
