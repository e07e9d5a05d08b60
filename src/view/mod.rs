//! Presentation glue: what a front end needs to draw the catalogue.

pub mod card;
pub mod detail;

pub use card::Card;
pub use detail::{detail, DetailOutcome, DetailView, MapOutcome, MapPin};

use serde::Serialize;

use crate::common::constants::{ALL_STATES, ALL_TYPES};
use crate::pipeline::Catalogue;

/// Choices offered by the region and category selectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptions {
    /// `"All States"` then the sorted regions; `"All Types"` then the sorted categories
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        let mut regions = vec![ALL_STATES.to_string()];
        regions.extend(catalogue.regions());
        let mut categories = vec![ALL_TYPES.to_string()];
        categories.extend(catalogue.categories());
        Self { regions, categories }
    }
}

pub fn cards(catalogue: &Catalogue) -> Vec<Card> {
    catalogue.iter().map(Card::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::seed_records;
    use crate::pipeline::{assemble, CatalogFilter, Normalizer};

    #[test]
    fn test_filter_options_lead_with_all() {
        let seed = Normalizer::default().normalize_seed(&seed_records());
        let (catalogue, _) = assemble(seed, vec![], vec![], vec![]);

        let options = FilterOptions::from_catalogue(&catalogue);
        assert_eq!(
            options.regions,
            vec![
                "All States",
                "Chhattisgarh",
                "Jammu & Kashmir",
                "Karnataka",
                "Punjab",
                "Uttar Pradesh",
                "West Bengal"
            ]
        );
        assert_eq!(options.categories, vec!["All Types", "Craft", "Textile"]);

        let filter = CatalogFilter::new(
            Some(options.regions[0].as_str()),
            Some(options.categories[0].as_str()),
            None,
        );
        assert_eq!(filter.apply(&catalogue).len(), 7);
    }

    #[test]
    fn test_empty_catalogue_options() {
        let options = FilterOptions::from_catalogue(&Catalogue::default());
        assert_eq!(options.regions, vec!["All States"]);
        assert_eq!(options.categories, vec!["All Types"]);
        assert!(cards(&Catalogue::default()).is_empty());
    }
}
