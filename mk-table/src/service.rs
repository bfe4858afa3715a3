//! Data-access services for the record table.

use log::{debug, info};
use mk_gateway::{Gateway, GatewayError};
use mk_model::dates::now_timestamp;
use mk_model::{Notice, Record, RecordDraft, RecordPage, RecordQuery};
use mk_store::Database;
use std::cell::Cell;
use std::future::{ready, Future};
use std::pin::Pin;
use thiserror::Error;

/// Review backend endpoint returning every record of a template.
pub const RECORD_SEARCH_PATH: &str = "/km-review/gettempId/page/date";

/// Boxed future that may borrow from the service. Not `Send`: the table
/// runs on the browser's single thread.
pub type LocalFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("local store error: {0}")]
    Store(String),

    #[error("record {0} does not exist")]
    NotFound(String),
}

impl ServiceError {
    pub fn notice(&self) -> Notice {
        match self {
            Self::Gateway(e) => e.notice(),
            Self::Store(_) => Notice::error(mk_gateway::MSG_GENERIC),
            Self::NotFound(id) => Notice::error(format!("Record {id} no longer exists")),
        }
    }
}

/// Where the table gets and puts its records.
pub trait RecordService {
    /// One page of records for `query`, with the filtered total.
    fn search<'a>(&'a self, query: &'a RecordQuery)
        -> LocalFuture<'a, Result<RecordPage, ServiceError>>;

    /// Persist a new record built from `draft`.
    fn create(&self, draft: RecordDraft) -> LocalFuture<'_, Result<Record, ServiceError>>;

    /// Persist edits to an existing record.
    fn update(&self, record: Record) -> LocalFuture<'_, Result<Record, ServiceError>>;

    fn delete<'a>(&'a self, id: &'a str) -> LocalFuture<'a, Result<(), ServiceError>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Records from the review backend.
///
/// The search endpoint returns the template's whole record list, so filtering
/// and paging happen here with [`RecordQuery::apply`]. The backend has no
/// write endpoints: create, update and delete are logged and reported as
/// successful.
pub struct GatewayRecordService {
    gateway: Gateway,
    created: Cell<u32>,
}

impl GatewayRecordService {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            created: Cell::new(0),
        }
    }
}

impl RecordService for GatewayRecordService {
    fn search<'a>(
        &'a self,
        query: &'a RecordQuery,
    ) -> LocalFuture<'a, Result<RecordPage, ServiceError>> {
        Box::pin(async move {
            let records: Vec<Record> = self.gateway.post(RECORD_SEARCH_PATH, query).await?;
            debug!("review backend returned {} records", records.len());
            Ok(query.apply(&records))
        })
    }

    fn create(&self, draft: RecordDraft) -> LocalFuture<'_, Result<Record, ServiceError>> {
        let n = self.created.get() + 1;
        self.created.set(n);
        let record = draft.into_record(format!("pending-{n}"), now_timestamp());
        info!("create record {} (not persisted by review backend)", record.id);
        Box::pin(ready(Ok(record)))
    }

    fn update(&self, mut record: Record) -> LocalFuture<'_, Result<Record, ServiceError>> {
        record.modified_at = now_timestamp();
        info!("update record {} (not persisted by review backend)", record.id);
        Box::pin(ready(Ok(record)))
    }

    fn delete<'a>(&'a self, id: &'a str) -> LocalFuture<'a, Result<(), ServiceError>> {
        info!("delete record {id} (not persisted by review backend)");
        Box::pin(ready(Ok(())))
    }

    fn name(&self) -> &'static str {
        "review backend"
    }
}

/// Records from the in-memory SQLite store.
pub struct StoreRecordService {
    db: Database,
    template_id: Option<String>,
}

impl StoreRecordService {
    /// `template_id` is stamped on records created through this service.
    pub fn new(db: Database, template_id: Option<String>) -> Self {
        Self { db, template_id }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

fn store_err(err: anyhow::Error) -> ServiceError {
    ServiceError::Store(format!("{err:#}"))
}

impl RecordService for StoreRecordService {
    fn search<'a>(
        &'a self,
        query: &'a RecordQuery,
    ) -> LocalFuture<'a, Result<RecordPage, ServiceError>> {
        Box::pin(ready(self.db.search_records(query).map_err(store_err)))
    }

    fn create(&self, draft: RecordDraft) -> LocalFuture<'_, Result<Record, ServiceError>> {
        let result = self.db.next_record_id().map_err(store_err).and_then(|id| {
            let record = draft.into_record(id, now_timestamp());
            self.db
                .save_record(&record, self.template_id.as_deref())
                .map_err(store_err)?;
            Ok(record)
        });
        Box::pin(ready(result))
    }

    fn update(&self, mut record: Record) -> LocalFuture<'_, Result<Record, ServiceError>> {
        let result = match self.db.get_record(&record.id) {
            Ok(Some(stored)) => {
                record.created_at = stored.created_at;
                record.modified_at = now_timestamp();
                self.db
                    .save_record(&record, None)
                    .map(|_| record)
                    .map_err(store_err)
            }
            Ok(None) => Err(ServiceError::NotFound(record.id)),
            Err(e) => Err(store_err(e)),
        };
        Box::pin(ready(result))
    }

    fn delete<'a>(&'a self, id: &'a str) -> LocalFuture<'a, Result<(), ServiceError>> {
        let result = match self.db.delete_record(id) {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::NotFound(id.to_string())),
            Err(e) => Err(store_err(e)),
        };
        Box::pin(ready(result))
    }

    fn name(&self) -> &'static str {
        "demo store"
    }
}
