//! Hazardous-chemicals catalog search.

use log::warn;
use mk_gateway::{Gateway, GatewayError};
use mk_model::catalog::{search_catalog, CatalogEntry};
use mk_model::{Notice, Notifier};

/// Full catalog; the empty `fdValue` asks for every entry.
pub const CATALOG_PATH: &str = "/Optimize/PhaseIIofEHS/getDangerousGoods/all?fdValue=";

pub async fn fetch_catalog(gateway: &Gateway) -> Result<Vec<CatalogEntry>, GatewayError> {
    gateway.get(CATALOG_PATH).await
}

/// Catalog loaded once, searched locally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSearch {
    entries: Vec<CatalogEntry>,
    query: String,
    results: Vec<CatalogEntry>,
    searched: bool,
}

impl CatalogSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded<N: Notifier>(
        &mut self,
        result: Result<Vec<CatalogEntry>, GatewayError>,
        notifier: &N,
    ) {
        match result {
            Ok(entries) => self.entries = entries,
            Err(err) => {
                warn!("catalog load failed: {err}");
                notifier.notify(Notice::warning("Failed to load the chemicals catalog"));
            }
        }
    }

    /// Run a search. Blank queries are ignored and return `false`.
    pub fn search(&mut self, query: &str) -> bool {
        match search_catalog(&self.entries, query) {
            Some(hits) => {
                self.results = hits.into_iter().cloned().collect();
                self.query = query.trim().to_string();
                self.searched = true;
                true
            }
            None => false,
        }
    }

    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn results(&self) -> &[CatalogEntry] {
        &self.results
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn result_summary(&self) -> String {
        format!("About {} results", self.results.len())
    }

    pub fn no_results_hint(&self) -> String {
        format!("No results for \"{}\"", self.query)
    }
}
