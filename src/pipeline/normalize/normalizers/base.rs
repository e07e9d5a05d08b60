use crate::common::constants::{
    ALLOCATION_NOT_AVAILABLE, COOPERATIVE_TO_BE_UPDATED, SCHEME_TO_BE_UPDATED,
};
use crate::domain::{Category, GeoPoint};
use crate::geo;

use super::super::{NormalizationWarning, NormalizedRecord};

/// Turns one typed row of a source into a catalogue record
pub trait SourceNormalizer {
    type Row;

    /// Normalize a row. Missing data degrades to defaults; this never fails.
    fn normalize(&self, row: &Self::Row) -> NormalizedRecord;

    /// The source this normalizer handles
    fn source_id(&self) -> &'static str;
}

/// Scheme, allocation and cooperative values for records no table describes
pub struct SchemeDefaults {
    pub scheme_name: String,
    pub scheme_allocation: String,
    pub cooperative_name: String,
}

impl Default for SchemeDefaults {
    fn default() -> Self {
        Self {
            scheme_name: SCHEME_TO_BE_UPDATED.to_string(),
            scheme_allocation: ALLOCATION_NOT_AVAILABLE.to_string(),
            cooperative_name: COOPERATIVE_TO_BE_UPDATED.to_string(),
        }
    }
}

/// The row's name, or `"Unknown {Category}"`
pub fn name_or_default(
    name: Option<&str>,
    category: &Category,
    warnings: &mut Vec<NormalizationWarning>,
) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => {
            warnings.push(NormalizationWarning::MissingField("name"));
            format!("Unknown {}", category)
        }
    }
}

/// Trimmed, non-blank region
pub fn clean_region(region: Option<&str>, warnings: &mut Vec<NormalizationWarning>) -> Option<String> {
    let region = region.map(str::trim).filter(|r| !r.is_empty()).map(str::to_string);
    if region.is_none() {
        warnings.push(NormalizationWarning::MissingField("region"));
    }
    region
}

/// Coordinates supplied by the row when it carries a full finite pair,
/// otherwise the lookup position of the region.
pub fn resolve_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
    region: Option<&str>,
    warnings: &mut Vec<NormalizationWarning>,
) -> Option<GeoPoint> {
    if let Some(point) = latitude.zip(longitude).and_then(|(lat, lon)| GeoPoint::new(lat, lon)) {
        return Some(point);
    }

    let point = geo::lookup(region);
    if point.is_none() {
        if let Some(region) = region {
            warnings.push(NormalizationWarning::UnmappedRegion(region.to_string()));
        }
    }
    point
}
