//! Hazardous-chemicals catalog entries and keyword search.

use crate::serde_util::null_default;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "ID", default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "TITLE", default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(rename = "DESCRIPTION", default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(rename = "FDNAME", default, deserialize_with = "null_default")]
    pub name: String,
}

/// Entries whose title or name contains `query`, ignoring case.
///
/// Returns `None` for a blank query, which the search box ignores.
pub fn search_catalog<'a>(entries: &'a [CatalogEntry], query: &str) -> Option<Vec<&'a CatalogEntry>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    Some(
        entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&query) || e.name.to_lowercase().contains(&query)
            })
            .collect(),
    )
}
