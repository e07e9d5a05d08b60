use super::base::{clean_region, name_or_default, resolve_location, SchemeDefaults, SourceNormalizer};
use crate::apis::RegionalArtRow;
use crate::common::constants::DEFAULT_COUNTRY;
use crate::domain::{ArtFormRecord, Category};
use crate::pipeline::normalize::images::{resolve_image, ImageOverrides};
use crate::pipeline::normalize::{NormalizationWarning, NormalizedRecord};

/// Normalizer for painting and dance rows, which share one shape
pub struct RegionalArtNormalizer<'a> {
    category: Category,
    source_id: &'static str,
    overrides: &'a ImageOverrides,
}

impl<'a> RegionalArtNormalizer<'a> {
    pub fn new(category: Category, source_id: &'static str, overrides: &'a ImageOverrides) -> Self {
        Self {
            category,
            source_id,
            overrides,
        }
    }
}

/// `"Traditional {Category} from {region}."`, with India when the region is unknown
pub fn fallback_description(category: &Category, region: Option<&str>) -> String {
    format!(
        "Traditional {} from {}.",
        category,
        region.unwrap_or(DEFAULT_COUNTRY)
    )
}

impl SourceNormalizer for RegionalArtNormalizer<'_> {
    type Row = RegionalArtRow;

    fn normalize(&self, row: &RegionalArtRow) -> NormalizedRecord {
        let mut warnings = Vec::new();

        let name = name_or_default(row.name.as_deref(), &self.category, &mut warnings);
        let region = clean_region(row.region.as_deref(), &mut warnings);

        let description = match row.description.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(description) => description.to_string(),
            None => {
                warnings.push(NormalizationWarning::MissingField("description"));
                fallback_description(&self.category, region.as_deref())
            }
        };

        let image_url = resolve_image(
            row.image_url.as_deref(),
            row.name.as_deref(),
            &self.category,
            self.overrides,
        );
        let location = resolve_location(row.latitude, row.longitude, region.as_deref(), &mut warnings);
        let defaults = SchemeDefaults::default();

        NormalizedRecord {
            record: ArtFormRecord {
                name,
                category: self.category.clone(),
                region,
                has_gi_tag: false,
                description,
                image_url,
                location,
                scheme_name: defaults.scheme_name,
                scheme_allocation: defaults.scheme_allocation,
                cooperative_name: defaults.cooperative_name,
            },
            source_id: self.source_id,
            warnings,
        }
    }

    fn source_id(&self) -> &'static str {
        self.source_id
    }
}
