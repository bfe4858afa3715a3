//! In-memory SQLite store for review records.
//!
//! Backs the record table when it runs without the review backend
//! (`?demo=1`). Records are loaded from CSV, searched with the same
//! criteria the remote endpoint accepts, and edited in place.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - Seed data embedded with `include_str!`
//!
//! # Usage
//!
//! ```rust
//! use mk_model::{PageRequest, RecordQuery, SearchCriteria};
//! use mk_store::Database;
//!
//! let db = Database::with_demo_records().unwrap();
//! let page = db
//!     .search_records(&RecordQuery::new(SearchCriteria::default(), PageRequest::new(1, 10)))
//!     .unwrap();
//! assert_eq!(page.records.len(), 10);
//! ```

pub mod schema;
mod loader;
mod queries;

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// Seed rows for the demo store.
pub const DEMO_RECORDS_CSV: &str = include_str!("../../fixtures/demo_records.csv");

/// In-memory record database.
///
/// Cheaply cloneable (via `Rc`); clones share the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        register_functions(&conn)?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// A database pre-loaded with [`DEMO_RECORDS_CSV`].
    pub fn with_demo_records() -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_records(DEMO_RECORDS_CSV)?;
        Ok(db)
    }
}

/// Name of the Unicode-aware lowercase function; SQLite's `lower()` only
/// folds ASCII.
pub(crate) const FOLD_CASE: &str = "fold_case";

fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        FOLD_CASE,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}
