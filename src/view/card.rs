use serde::Serialize;

use crate::common::constants::{IMAGE_NOT_AVAILABLE_URL, NOT_AVAILABLE};
use crate::domain::ArtFormRecord;

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Grid tile summarising one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub gi_label: &'static str,
}

impl Card {
    pub fn from_record(record: &ArtFormRecord) -> Self {
        Self {
            title: record.name.clone(),
            subtitle: format!(
                "{} • {}",
                record.category,
                record.region.as_deref().unwrap_or(NOT_AVAILABLE)
            ),
            description: preview(&record.description),
            image_url: display_image(&record.image_url),
            gi_label: gi_label(record.has_gi_tag),
        }
    }
}

pub fn gi_label(has_gi_tag: bool) -> &'static str {
    if has_gi_tag {
        "GI Tagged"
    } else {
        "Non GI"
    }
}

/// The record's image, or the "Image Not Available" placeholder when it has none
pub fn display_image(url: &str) -> String {
    if url.trim().is_empty() {
        IMAGE_NOT_AVAILABLE_URL.to_string()
    } else {
        url.to_string()
    }
}

/// First 100 characters, with `...` appended when anything was cut
fn preview(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return description.to_string();
    }
    let mut cut: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    cut.push_str("...");
    cut
}
