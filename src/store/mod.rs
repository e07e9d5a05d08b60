//! Query access to the remote tabular store backing the catalogue.

pub mod cache;
pub mod in_memory;
pub mod snowflake;

pub use cache::CachedStore;
pub use in_memory::InMemoryStore;
pub use snowflake::SnowflakeStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::common::error::Result;

/// A store that answers read-only queries with a table of named columns
#[async_trait]
pub trait TabularStore: Send + Sync {
    async fn query(&self, sql: &str) -> Result<Table>;
}

/// Result set of a query. Cell values arrive as text; SQL NULL is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows read as NULL in the missing columns.
    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(column))
    }

    pub fn iter(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().map(move |cells| TableRow { table: self, cells })
    }
}

/// Borrowed view of one row with access by column name
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    table: &'a Table,
    cells: &'a [Option<String>],
}

impl<'a> TableRow<'a> {
    /// Cell value for `column`, or `None` when the column is absent, the
    /// value is NULL, or it is blank.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.table.column_index(column)?;
        self.cells
            .get(index)
            .and_then(|cell| cell.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.table.column_index(column).is_some()
    }
}
