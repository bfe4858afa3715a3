//! SQL schema for the record store.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `records`, mirroring the review backend's row shape plus the
/// template id the record belongs to. Rows are returned in insertion
/// (`rowid`) order unless a sort is requested.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS records (
        id TEXT PRIMARY KEY,
        subject TEXT NOT NULL,
        number TEXT NOT NULL,
        status TEXT NOT NULL,
        created_at TEXT NOT NULL,
        modified_at TEXT NOT NULL,
        description TEXT,
        template_id TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_records_status ON records(status);
    CREATE INDEX IF NOT EXISTS idx_records_template ON records(template_id);
    "#
}
