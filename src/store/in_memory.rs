use super::{Table, TabularStore};
use crate::common::error::{CatalogError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// In-memory store keyed by query text, for offline runs and testing
#[derive(Clone, Default)]
pub struct InMemoryStore {
    responses: Arc<Mutex<HashMap<String, StoredResponse>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
enum StoredResponse {
    Table(Table),
    Failure(String),
}

/// Fixture layout: one table per source id
#[derive(Debug, Deserialize)]
pub struct Fixture {
    #[serde(flatten)]
    pub tables: HashMap<String, Table>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `sql` with `table`
    pub fn insert(&self, sql: &str, table: Table) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(sql.to_string(), StoredResponse::Table(table));
    }

    /// Make `sql` fail with a backend error
    pub fn insert_failure(&self, sql: &str, message: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(sql.to_string(), StoredResponse::Failure(message.to_string()));
    }

    /// Number of times `query` was called, across all statements
    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    /// Read a fixture file of `{"<source id>": {"columns": [...], "rows": [[...]]}}`
    pub fn load_fixture(path: &Path) -> Result<Fixture> {
        let content = std::fs::read_to_string(path)?;
        let fixture: Fixture = serde_json::from_str(&content)?;
        debug!("Loaded fixture {} with {} tables", path.display(), fixture.tables.len());
        Ok(fixture)
    }
}

#[async_trait]
impl TabularStore for InMemoryStore {
    async fn query(&self, sql: &str) -> Result<Table> {
        self.queries.lock().unwrap().push(sql.to_string());

        let response = self.responses.lock().unwrap().get(sql).cloned();
        match response {
            Some(StoredResponse::Table(table)) => {
                debug!("Answered query from memory with {} rows", table.len());
                Ok(table)
            }
            Some(StoredResponse::Failure(message)) => Err(CatalogError::Store { message }),
            None => Err(CatalogError::store(format!("no table registered for query: {}", sql))),
        }
    }
}
