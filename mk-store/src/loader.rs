//! CSV loading for the record store.
//!
//! Expected format (with headers):
//! `FD_ID,FD_SUBJECT,FD_NUMBER,FD_PROCESS_STATUS,FD_CREATE_TIME,FD_LAST_MODIFIED_TIME,description,FD_TEMPLATE_ID`
//!
//! Empty `description` and `FD_TEMPLATE_ID` cells are stored as NULL.

use crate::Database;
use rusqlite::params;

impl Database {
    /// Load records from a CSV string. Rows with a blank id are skipped;
    /// a repeated id replaces the earlier row.
    pub fn load_records(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let field = |i: usize| r.get(i).unwrap_or("").trim();
            let optional = |i: usize| Some(field(i)).filter(|v| !v.is_empty());

            let id = field(0);
            if id.is_empty() {
                skipped += 1;
                continue;
            }
            conn.execute(
                "INSERT OR REPLACE INTO records
                    (id, subject, number, status, created_at, modified_at, description, template_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    id,
                    field(1),
                    field(2),
                    field(3),
                    field(4),
                    field(5),
                    optional(6),
                    optional(7)
                ],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} records ({} skipped)", count, skipped);
        Ok(())
    }
}
