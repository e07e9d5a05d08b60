// Catalogue pipeline: fetch, normalize, assemble, filter

pub mod catalog;
pub mod filter;
pub mod normalize;

pub use catalog::{assemble, AssemblyStats, Catalogue, CATALOGUE_COLUMNS};
pub use filter::{CatalogFilter, Choice};
pub use normalize::{ImageOverrides, Normalizer};

use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::apis::{fetch_rows, seed_records, CraftsAdapter, DancesAdapter, FailureReporter, PaintingsAdapter};
use crate::store::TabularStore;

/// Result of one catalogue build
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub catalogue: Catalogue,
    pub stats: AssemblyStats,
    pub sourced_rows: usize,
}

/// Builds the catalogue from the seed list and the three remote sources.
///
/// Source failures never abort a build; they go to the reporter and the
/// failed source contributes nothing.
pub struct Pipeline<'a> {
    store: &'a dyn TabularStore,
    reporter: &'a dyn FailureReporter,
    normalizer: Normalizer,
}

impl<'a> Pipeline<'a> {
    pub fn new(store: &'a dyn TabularStore, reporter: &'a dyn FailureReporter, normalizer: Normalizer) -> Self {
        Self {
            store,
            reporter,
            normalizer,
        }
    }

    #[instrument(skip(self))]
    pub async fn build_catalogue(&self) -> PipelineResult {
        let start = Instant::now();

        let painting_rows = fetch_rows(&PaintingsAdapter, self.store, self.reporter).await;
        let dance_rows = fetch_rows(&DancesAdapter, self.store, self.reporter).await;
        let craft_rows = fetch_rows(&CraftsAdapter, self.store, self.reporter).await;
        let sourced_rows = painting_rows.len() + dance_rows.len() + craft_rows.len();

        let seed = self.normalizer.normalize_seed(&seed_records());
        let paintings = self.normalizer.normalize_paintings(&painting_rows);
        let dances = self.normalizer.normalize_dances(&dance_rows);
        let crafts = self.normalizer.normalize_crafts(&craft_rows);

        let (catalogue, stats) = assemble(seed, paintings, dances, crafts);

        if sourced_rows == 0 {
            warn!("No rows from any remote source; catalogue holds seed records only");
        }
        info!(
            records = catalogue.len(),
            duplicates = stats.duplicates,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Catalogue assembled"
        );

        PipelineResult {
            catalogue,
            stats,
            sourced_rows,
        }
    }
}
