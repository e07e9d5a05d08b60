//! Metric recording for the catalogue pipeline.
//!
//! Calls go through the `metrics` facade; they are no-ops until the host
//! process installs a recorder.

use std::fmt;

/// All metric names used in the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    SourcesRequestsSuccess,
    SourcesRequestsError,
    SourcesRowsFetched,
    NormalizeRecordsProcessed,
    NormalizeWarnings,
    CatalogRecords,
    CatalogDuplicatesDropped,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricName::SourcesRequestsSuccess => "art_catalog_sources_requests_success_total",
            MetricName::SourcesRequestsError => "art_catalog_sources_requests_error_total",
            MetricName::SourcesRowsFetched => "art_catalog_sources_rows_fetched_total",
            MetricName::NormalizeRecordsProcessed => "art_catalog_normalize_records_processed_total",
            MetricName::NormalizeWarnings => "art_catalog_normalize_warnings_total",
            MetricName::CatalogRecords => "art_catalog_catalog_records",
            MetricName::CatalogDuplicatesDropped => "art_catalog_catalog_duplicates_dropped_total",
        };
        f.write_str(name)
    }
}

pub mod sources {
    use super::MetricName;

    /// Record a successful source query and the rows it returned
    pub fn request_success(source: &str, rows: usize) {
        ::metrics::counter!(MetricName::SourcesRequestsSuccess.to_string(), "source" => source.to_string())
            .increment(1);
        ::metrics::counter!(MetricName::SourcesRowsFetched.to_string(), "source" => source.to_string())
            .increment(rows as u64);
    }

    /// Record a failed source query
    pub fn request_error(source: &str) {
        ::metrics::counter!(MetricName::SourcesRequestsError.to_string(), "source" => source.to_string())
            .increment(1);
    }
}

pub mod normalize {
    use super::MetricName;

    pub fn record_normalized(source: &str) {
        ::metrics::counter!(MetricName::NormalizeRecordsProcessed.to_string(), "source" => source.to_string())
            .increment(1);
    }

    pub fn warning_logged(warning_type: &'static str) {
        ::metrics::counter!(MetricName::NormalizeWarnings.to_string(), "warning_type" => warning_type)
            .increment(1);
    }
}

pub mod catalog {
    use super::MetricName;

    /// Record the size of a freshly assembled catalogue
    pub fn assembled(records: usize, duplicates: usize) {
        ::metrics::gauge!(MetricName::CatalogRecords.to_string()).set(records as f64);
        ::metrics::counter!(MetricName::CatalogDuplicatesDropped.to_string()).increment(duplicates as u64);
    }
}
