//! Source adapters: one fixed query per remote table, validated into typed rows.

pub mod crafts;
pub mod dances;
pub mod paintings;
pub mod seed;

pub use crafts::{CraftRow, CraftsAdapter};
pub use dances::DancesAdapter;
pub use paintings::PaintingsAdapter;
pub use seed::{seed_records, SeedRecord};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use tracing::{error, info, instrument};

use crate::common::error::CatalogError;
use crate::observability::metrics;
use crate::store::{TableRow, TabularStore};

/// A remote source of catalogue rows
pub trait SourceAdapter: Send + Sync {
    /// Typed row produced by validation
    type Row;

    /// Identifier used in logs, metrics and failure reports
    fn source_id(&self) -> &'static str;

    /// The single read-only query this source issues
    fn query(&self) -> &'static str;

    /// Validate one untrusted row. Never fails: unusable values become `None`.
    fn parse_row(&self, row: &TableRow<'_>) -> Self::Row;
}

/// Columns shared by the painting and dance tables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionalArtRow {
    pub name: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Column aliases of a painting or dance query
pub(crate) struct RegionalArtColumns {
    pub name: &'static str,
    pub region: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
}

impl RegionalArtColumns {
    pub(crate) fn parse(&self, row: &TableRow<'_>) -> RegionalArtRow {
        RegionalArtRow {
            name: text(row, self.name),
            region: text(row, self.region),
            description: text(row, self.description),
            image_url: text(row, self.image_url),
            latitude: number(row, self.latitude),
            longitude: number(row, self.longitude),
        }
    }
}

pub(crate) fn text(row: &TableRow<'_>, column: &str) -> Option<String> {
    row.get(column).map(str::to_string)
}

pub(crate) fn number(row: &TableRow<'_>, column: &str) -> Option<f64> {
    row.get(column)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// A failed source query, as handed to a [`FailureReporter`]
#[derive(Debug, Clone, Serialize)]
pub struct SourceFailure {
    pub source_id: String,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

/// Channel that receives source failures. Reporting never fails.
pub trait FailureReporter: Send + Sync {
    fn report(&self, failure: &SourceFailure);
}

/// Reporter that keeps every failure so it can be shown to the user
#[derive(Default)]
pub struct CollectingReporter {
    failures: Mutex<Vec<SourceFailure>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<SourceFailure> {
        self.lock().clone()
    }

    // A panic elsewhere must not stop failures from being recorded
    fn lock(&self) -> MutexGuard<'_, Vec<SourceFailure>> {
        self.failures.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FailureReporter for CollectingReporter {
    fn report(&self, failure: &SourceFailure) {
        self.lock().push(failure.clone());
    }
}

/// Run an adapter's query and validate the rows.
///
/// Any store failure is reported and logged, and an empty batch is returned
/// so the rest of the catalogue can still be built.
#[instrument(skip_all, fields(source = adapter.source_id()))]
pub async fn fetch_rows<A: SourceAdapter>(
    adapter: &A,
    store: &dyn TabularStore,
    reporter: &dyn FailureReporter,
) -> Vec<A::Row> {
    let source_id = adapter.source_id();

    match store.query(adapter.query()).await {
        Ok(table) => {
            let rows: Vec<A::Row> = table.iter().map(|row| adapter.parse_row(&row)).collect();
            metrics::sources::request_success(source_id, rows.len());
            info!("Fetched {} rows", rows.len());
            rows
        }
        Err(e) => {
            let err = CatalogError::SourceUnavailable {
                source_id: source_id.to_string(),
                message: e.to_string(),
            };
            error!("{}", err);
            metrics::sources::request_error(source_id);
            reporter.report(&SourceFailure {
                source_id: source_id.to_string(),
                message: e.to_string(),
                occurred_at: Utc::now(),
            });
            Vec::new()
        }
    }
}
