//! Record queries and edits.
//!
//! [`Database::search_records`] answers the same [`RecordQuery`] the remote
//! endpoint receives: the filters become a WHERE clause, the page window a
//! LIMIT/OFFSET, and the pagination total is a COUNT over the same filter.

use crate::{Database, FOLD_CASE};
use mk_model::{
    Pagination, ProcessStatus, Record, RecordPage, RecordQuery, SortColumn, SortOrder,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

const RECORD_COLUMNS: &str =
    "id, subject, number, status, created_at, modified_at, description";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    let status: String = row.get(3)?;
    Ok(Record {
        id: row.get(0)?,
        subject: row.get(1)?,
        number: row.get(2)?,
        status: ProcessStatus::from_code(&status),
        created_at: row.get(4)?,
        modified_at: row.get(5)?,
        description: row.get(6)?,
    })
}

fn sort_column(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Number => "number",
        SortColumn::CreatedAt => "created_at",
        SortColumn::ModifiedAt => "modified_at",
    }
}

fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

/// WHERE clause (possibly empty) and its positional parameters.
fn where_clause(query: &RecordQuery) -> (String, Vec<Value>) {
    let criteria = &query.criteria;
    let mut clauses: Vec<String> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(title) = &criteria.title {
        clauses.push(format!("instr({FOLD_CASE}(subject), ?) > 0"));
        values.push(Value::Text(title.to_lowercase()));
    }
    if let Some(code) = &criteria.code {
        clauses.push("instr(number, ?) > 0".into());
        values.push(Value::Text(code.clone()));
    }
    if let Some(status) = &criteria.status {
        clauses.push("status = ?".into());
        values.push(Value::Text(status.code().to_string()));
    }
    if let Some(template_id) = &criteria.template_id {
        clauses.push("template_id = ?".into());
        values.push(Value::Text(template_id.clone()));
    }
    if !query.status_filter.is_empty() {
        let marks = vec!["?"; query.status_filter.len()].join(", ");
        clauses.push(format!("status IN ({marks})"));
        values.extend(
            query
                .status_filter
                .iter()
                .map(|s| Value::Text(s.code().to_string())),
        );
    }

    if clauses.is_empty() {
        (String::new(), values)
    } else {
        (format!(" WHERE {}", clauses.join(" AND ")), values)
    }
}

impl Database {
    /// One page of records matching `query`, with the filtered total.
    pub fn search_records(&self, query: &RecordQuery) -> anyhow::Result<RecordPage> {
        let conn = self.conn.borrow();
        let (filter, mut values) = where_clause(query);

        let total: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM records{filter}"),
            params_from_iter(values.iter()),
            |row| row.get(0),
        )?;

        let order = match &query.sort {
            Some(sort) => format!(
                " ORDER BY {} {}, rowid",
                sort_column(sort.column),
                sort_direction(sort.order)
            ),
            None => " ORDER BY rowid".to_string(),
        };
        values.push(Value::Integer(i64::from(query.page.page_size)));
        values.push(Value::Integer(query.page.offset() as i64));

        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM records{filter}{order} LIMIT ? OFFSET ?"
        ))?;
        let records = stmt
            .query_map(params_from_iter(values.iter()), record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "query: search_records returned {} of {} records",
            records.len(),
            total
        );
        Ok(RecordPage {
            records,
            pagination: Pagination::new(query.page, total.max(0) as u64),
        })
    }

    pub fn get_record(&self, id: &str) -> anyhow::Result<Option<Record>> {
        let conn = self.conn.borrow();
        let record = conn
            .query_row(
                &format!("SELECT {RECORD_COLUMNS} FROM records WHERE id = ?1"),
                params![id],
                record_from_row,
            )
            .optional()?;
        Ok(record)
    }

    pub fn count_records(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }

    /// Id for the next inserted record, unique within this database.
    pub fn next_record_id(&self) -> anyhow::Result<String> {
        let conn = self.conn.borrow();
        let next: i64 = conn.query_row(
            "SELECT COALESCE(MAX(rowid), 0) + 1 FROM records",
            [],
            |row| row.get(0),
        )?;
        Ok(format!("local-{next:04}"))
    }

    /// Insert a new record, or overwrite the editable fields of an existing
    /// one. An update keeps the stored template id and creation time.
    pub fn save_record(&self, record: &Record, template_id: Option<&str>) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        conn.execute(
            "INSERT INTO records
                (id, subject, number, status, created_at, modified_at, description, template_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                subject = excluded.subject,
                number = excluded.number,
                status = excluded.status,
                modified_at = excluded.modified_at,
                description = excluded.description",
            params![
                record.id,
                record.subject,
                record.number,
                record.status.code(),
                record.created_at,
                record.modified_at,
                record.description,
                template_id
            ],
        )?;
        log::info!("query: saved record {}", record.id);
        Ok(())
    }

    /// Delete a record; `false` when no row had that id.
    pub fn delete_record(&self, id: &str) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let removed = conn.execute("DELETE FROM records WHERE id = ?1", params![id])?;
        log::info!("query: delete_record {} removed {} rows", id, removed);
        Ok(removed > 0)
    }
}
