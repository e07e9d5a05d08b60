pub mod images;
pub mod normalizers;

pub use images::ImageOverrides;
pub use normalizers::{CraftNormalizer, RegionalArtNormalizer, SeedNormalizer, SourceNormalizer};

use serde::Serialize;
use tracing::debug;

use crate::apis::{CraftRow, RegionalArtRow, SeedRecord};
use crate::common::constants::{DANCES_SOURCE, PAINTINGS_SOURCE};
use crate::domain::{ArtFormRecord, Category};
use crate::observability::metrics;

/// A record in canonical shape plus what had to be filled in to get there
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub record: ArtFormRecord,
    pub source_id: &'static str,
    pub warnings: Vec<NormalizationWarning>,
}

/// Recoverable data problems found while normalizing a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NormalizationWarning {
    /// The field was absent or blank and a default was used
    MissingField(&'static str),
    /// The region has no entry in the coordinate table
    UnmappedRegion(String),
}

impl NormalizationWarning {
    pub fn kind(&self) -> &'static str {
        match self {
            NormalizationWarning::MissingField(_) => "missing_field",
            NormalizationWarning::UnmappedRegion(_) => "unmapped_region",
        }
    }
}

/// Entry point for turning source rows into catalogue records.
///
/// Holds the injected image overrides and hands out one normalizer per source.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    overrides: ImageOverrides,
}

impl Normalizer {
    pub fn new(overrides: ImageOverrides) -> Self {
        Self { overrides }
    }

    pub fn seed(&self) -> SeedNormalizer {
        SeedNormalizer
    }

    pub fn paintings(&self) -> RegionalArtNormalizer<'_> {
        RegionalArtNormalizer::new(Category::Painting, PAINTINGS_SOURCE, &self.overrides)
    }

    pub fn dances(&self) -> RegionalArtNormalizer<'_> {
        RegionalArtNormalizer::new(Category::Dance, DANCES_SOURCE, &self.overrides)
    }

    pub fn crafts(&self) -> CraftNormalizer<'_> {
        CraftNormalizer::new(&self.overrides)
    }

    pub fn normalize_seed(&self, records: &[SeedRecord]) -> Vec<ArtFormRecord> {
        normalize_batch(&self.seed(), records)
    }

    pub fn normalize_paintings(&self, rows: &[RegionalArtRow]) -> Vec<ArtFormRecord> {
        normalize_batch(&self.paintings(), rows)
    }

    pub fn normalize_dances(&self, rows: &[RegionalArtRow]) -> Vec<ArtFormRecord> {
        normalize_batch(&self.dances(), rows)
    }

    pub fn normalize_crafts(&self, rows: &[CraftRow]) -> Vec<ArtFormRecord> {
        normalize_batch(&self.crafts(), rows)
    }
}

/// Normalize every row of one source, logging and counting the warnings
pub fn normalize_batch<N: SourceNormalizer>(normalizer: &N, rows: &[N::Row]) -> Vec<ArtFormRecord> {
    rows.iter()
        .map(|row| {
            let normalized = normalizer.normalize(row);
            metrics::normalize::record_normalized(normalized.source_id);
            for warning in &normalized.warnings {
                metrics::normalize::warning_logged(warning.kind());
                debug!(
                    source = normalized.source_id,
                    record = %normalized.record.name,
                    "Normalization warning: {:?}",
                    warning
                );
            }
            normalized.record
        })
        .collect()
}
