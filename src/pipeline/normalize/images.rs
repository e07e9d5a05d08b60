use serde::Deserialize;
use std::collections::HashMap;

use crate::common::constants::PLACEHOLDER_IMAGE_BASE;
use crate::domain::Category;

/// Hand-curated image URLs, keyed by the exact art form name as it arrives
/// from the store. Empty unless configured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ImageOverrides(HashMap<String, String>);

impl ImageOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.0.insert(name.into(), url.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for ImageOverrides {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// Pick the image for a sourced record: the row's own URL, then a
/// configured override for the exact name, then a generated placeholder.
pub fn resolve_image(
    row_url: Option<&str>,
    name: Option<&str>,
    category: &Category,
    overrides: &ImageOverrides,
) -> String {
    if let Some(url) = row_url.filter(|u| !u.trim().is_empty()) {
        return url.to_string();
    }
    if let Some(url) = name.and_then(|n| overrides.get(n)) {
        return url.to_string();
    }
    placeholder_image(name, category)
}

/// Placeholder image whose caption is the name (`' '` -> `+`, `/` -> `_`),
/// or the category label when there is no name.
pub fn placeholder_image(name: Option<&str>, category: &Category) -> String {
    let text = match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.replace(' ', "+").replace('/', "_"),
        None => category.to_string(),
    };
    format!("{}?text={}", PLACEHOLDER_IMAGE_BASE, text)
}
