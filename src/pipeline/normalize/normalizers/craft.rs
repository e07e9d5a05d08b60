use super::base::{clean_region, name_or_default, resolve_location, SchemeDefaults, SourceNormalizer};
use crate::apis::CraftRow;
use crate::common::constants::{CRAFTS_SOURCE, NOT_AVAILABLE};
use crate::domain::{ArtFormRecord, Category};
use crate::pipeline::normalize::images::{resolve_image, ImageOverrides};
use crate::pipeline::normalize::{NormalizationWarning, NormalizedRecord};

/// Normalizer for rows of the crafts table
pub struct CraftNormalizer<'a> {
    overrides: &'a ImageOverrides,
}

impl<'a> CraftNormalizer<'a> {
    pub fn new(overrides: &'a ImageOverrides) -> Self {
        Self { overrides }
    }
}

/// Crafts carry no description column; build one from where the craft is practiced.
///
/// `"A traditional {name} from {district}, {region}. Practiced in {village}."`,
/// leaving out the district and village parts when unknown and using `N/A`
/// for a missing region.
pub fn craft_description(name: &str, district: Option<&str>, region: Option<&str>, village: Option<&str>) -> String {
    let region = region.unwrap_or(NOT_AVAILABLE);
    let mut description = match district {
        Some(district) => format!("A traditional {} from {}, {}.", name, district, region),
        None => format!("A traditional {} from {}.", name, region),
    };
    if let Some(village) = village {
        description.push_str(&format!(" Practiced in {}.", village));
    }
    description
}

impl SourceNormalizer for CraftNormalizer<'_> {
    type Row = CraftRow;

    fn normalize(&self, row: &CraftRow) -> NormalizedRecord {
        let mut warnings = Vec::new();
        let category = Category::Craft;

        let name = name_or_default(row.name.as_deref(), &category, &mut warnings);
        let region = clean_region(row.region.as_deref(), &mut warnings);
        if row.district.is_none() {
            warnings.push(NormalizationWarning::MissingField("district"));
        }
        if row.village.is_none() {
            warnings.push(NormalizationWarning::MissingField("village"));
        }

        let description = craft_description(
            &name,
            row.district.as_deref(),
            region.as_deref(),
            row.village.as_deref(),
        );
        let image_url = resolve_image(row.image_url.as_deref(), row.name.as_deref(), &category, self.overrides);
        let location = resolve_location(row.latitude, row.longitude, region.as_deref(), &mut warnings);
        let defaults = SchemeDefaults::default();

        NormalizedRecord {
            record: ArtFormRecord {
                name,
                category,
                region,
                has_gi_tag: false,
                description,
                image_url,
                location,
                scheme_name: defaults.scheme_name,
                scheme_allocation: defaults.scheme_allocation,
                cooperative_name: defaults.cooperative_name,
            },
            source_id: CRAFTS_SOURCE,
            warnings,
        }
    }

    fn source_id(&self) -> &'static str {
        CRAFTS_SOURCE
    }
}
