use crate::common::constants::{ALL, ALL_STATES, ALL_TYPES};
use crate::domain::ArtFormRecord;
use crate::pipeline::catalog::Catalogue;

/// One equality predicate, or no constraint at all
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Parse a selection; `"All"` and the UI labels `"All States"` /
    /// `"All Types"` mean no filtering.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL) | Some(ALL_STATES) | Some(ALL_TYPES) => Choice::All,
            Some(other) => Choice::Only(other.to_string()),
        }
    }

    fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

/// Region, category and free-text constraints, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub region: Choice,
    pub category: Choice,
    pub search: Option<String>,
}

impl CatalogFilter {
    pub fn new(region: Option<&str>, category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            region: Choice::parse(region),
            category: Choice::parse(category),
            // The needle is matched as typed; only an empty string disables search
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.region == Choice::All && self.category == Choice::All && self.search.is_none()
    }

    pub fn matches(&self, record: &ArtFormRecord) -> bool {
        self.region.matches(record.region.as_deref())
            && self.category.matches(Some(record.category.as_str()))
            && self.matches_search(record)
    }

    fn matches_search(&self, record: &ArtFormRecord) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };
        let needle = needle.to_lowercase();
        record.name.to_lowercase().contains(&needle) || record.description.to_lowercase().contains(&needle)
    }

    /// Records that pass every predicate, in catalogue order. The input is left untouched.
    pub fn apply(&self, catalogue: &Catalogue) -> Catalogue {
        if self.is_unfiltered() {
            return catalogue.clone();
        }
        catalogue.retain_matching(|record| self.matches(record))
    }
}
