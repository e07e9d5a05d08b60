use serde::Serialize;
use tracing::warn;

use crate::common::constants::NOT_AVAILABLE;
use crate::domain::{ArtFormRecord, GeoPoint, RecordKey};
use crate::pipeline::Catalogue;

use super::card::{display_image, gi_label};

const MAP_ZOOM: u8 = 7;
const HIGHLIGHT_RADIUS_M: u32 = 50_000;

/// Everything shown for a selected record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub name: String,
    pub gi_label: &'static str,
    pub image_url: String,
    pub image_caption: String,
    pub description: String,
    pub origin: String,
    pub category: String,
    pub scheme_name: String,
    pub scheme_allocation: String,
    pub cooperative_name: String,
    pub data_story: String,
    pub map: MapOutcome,
}

/// Marker for a record with a usable location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub popup: String,
    pub tooltip: String,
    pub radius_m: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MapOutcome {
    Pin(MapPin),
    /// The record carries no location
    Unavailable,
    /// The location cannot be drawn on a map
    InvalidCoordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    NoSelection,
    /// A selection exists but the catalogue is empty
    DataUnavailable(RecordKey),
    /// The selection is not in the current catalogue
    NotFound(RecordKey),
    Found(Box<DetailView>),
}

/// Resolve a selection against the current catalogue
pub fn detail(catalogue: &Catalogue, selection: Option<&RecordKey>) -> DetailOutcome {
    let Some(key) = selection else {
        return DetailOutcome::NoSelection;
    };
    if catalogue.is_empty() {
        warn!("Art forms data is not available; cannot show details for {}", key);
        return DetailOutcome::DataUnavailable(key.clone());
    }
    match catalogue.get(key) {
        Some(record) => DetailOutcome::Found(Box::new(DetailView::from_record(record))),
        None => {
            warn!("Details for {} could not be found in the current catalogue", key);
            DetailOutcome::NotFound(key.clone())
        }
    }
}

impl DetailView {
    pub fn from_record(record: &ArtFormRecord) -> Self {
        let origin = record.region.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let data_story = format!(
            "This art form originates from {origin}. Government initiatives like {scheme} have allocated \
             {allocation} for its promotion. It has a GI Tag: {gi}. Supporting local artisans through \
             {cooperative} helps preserve this cultural heritage and provides sustainable livelihoods.",
            origin = origin,
            scheme = record.scheme_name,
            allocation = record.scheme_allocation,
            gi = if record.has_gi_tag { "Yes" } else { "No" },
            cooperative = record.cooperative_name,
        );

        Self {
            name: record.name.clone(),
            gi_label: gi_label(record.has_gi_tag),
            image_url: display_image(&record.image_url),
            image_caption: format!("{} - {} from {}", record.name, record.category, origin),
            description: record.description.clone(),
            category: record.category.to_string(),
            scheme_name: record.scheme_name.clone(),
            scheme_allocation: record.scheme_allocation.clone(),
            cooperative_name: record.cooperative_name.clone(),
            data_story,
            map: map_outcome(record),
            origin,
        }
    }
}

pub fn map_outcome(record: &ArtFormRecord) -> MapOutcome {
    match record.location {
        None => MapOutcome::Unavailable,
        Some(point) if !is_drawable(&point) => MapOutcome::InvalidCoordinate,
        Some(point) => MapOutcome::Pin(MapPin {
            latitude: point.latitude,
            longitude: point.longitude,
            zoom: MAP_ZOOM,
            popup: format!(
                "{}<br>{}",
                record.name,
                record.region.as_deref().unwrap_or(NOT_AVAILABLE)
            ),
            tooltip: record.name.clone(),
            radius_m: HIGHLIGHT_RADIUS_M,
        }),
    }
}

fn is_drawable(point: &GeoPoint) -> bool {
    point.latitude.is_finite() && point.longitude.is_finite() && point.is_on_earth()
}
