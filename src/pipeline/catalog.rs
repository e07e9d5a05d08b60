use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use crate::domain::{ArtFormRecord, RecordKey};
use crate::observability::metrics;

/// Column schema of every catalogue, including empty ones
pub const CATALOGUE_COLUMNS: [&str; 11] = [
    "name",
    "category",
    "region",
    "has_gi_tag",
    "description",
    "image_url",
    "latitude",
    "longitude",
    "scheme_name",
    "scheme_allocation",
    "cooperative_name",
];

/// The de-duplicated records of one pass, in merge order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalogue {
    records: Vec<ArtFormRecord>,
}

/// Counts from one assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyStats {
    pub input: usize,
    pub duplicates: usize,
}

impl Catalogue {
    pub fn columns(&self) -> &'static [&'static str] {
        &CATALOGUE_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtFormRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ArtFormRecord] {
        &self.records
    }

    pub fn get(&self, key: &RecordKey) -> Option<&ArtFormRecord> {
        self.records
            .iter()
            .find(|r| r.name == key.name && r.region == key.region)
    }

    /// First record with this name, whatever its region
    pub fn find_by_name(&self, name: &str) -> Option<&ArtFormRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Distinct regions, sorted; records without a region are skipped
    pub fn regions(&self) -> Vec<String> {
        let regions: BTreeSet<&str> = self.records.iter().filter_map(|r| r.region.as_deref()).collect();
        regions.into_iter().map(str::to_string).collect()
    }

    /// Distinct category labels, sorted
    pub fn categories(&self) -> Vec<String> {
        let categories: BTreeSet<&str> = self.records.iter().map(|r| r.category.as_str()).collect();
        categories.into_iter().map(str::to_string).collect()
    }

    /// Sub-catalogue of the records matching `keep`, order preserved
    pub fn retain_matching(&self, keep: impl Fn(&ArtFormRecord) -> bool) -> Catalogue {
        Catalogue {
            records: self.records.iter().filter(|r| keep(*r)).cloned().collect(),
        }
    }
}

/// Merge normalized batches into one catalogue.
///
/// Batches are concatenated as seed, paintings, dances, crafts; the first
/// record seen for a `(name, region)` key is kept and later ones dropped.
pub fn assemble(
    seed: Vec<ArtFormRecord>,
    paintings: Vec<ArtFormRecord>,
    dances: Vec<ArtFormRecord>,
    crafts: Vec<ArtFormRecord>,
) -> (Catalogue, AssemblyStats) {
    let input = seed.len() + paintings.len() + dances.len() + crafts.len();
    let mut seen: HashSet<RecordKey> = HashSet::with_capacity(input);
    let mut records = Vec::with_capacity(input);

    for record in seed.into_iter().chain(paintings).chain(dances).chain(crafts) {
        if seen.insert(record.key()) {
            records.push(record);
        }
    }

    let stats = AssemblyStats {
        input,
        duplicates: input - records.len(),
    };
    metrics::catalog::assembled(records.len(), stats.duplicates);

    (Catalogue { records }, stats)
}
