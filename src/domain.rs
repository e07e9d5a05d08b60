use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of art form carried by a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Textile,
    Craft,
    Painting,
    Dance,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Textile => "Textile",
            Category::Craft => "Craft",
            Category::Painting => "Painting",
            Category::Dance => "Dance",
            Category::Other(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "Textile" => Category::Textile,
            "Craft" => Category::Craft,
            "Painting" => Category::Painting,
            "Dance" => Category::Dance,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from(label.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// A latitude/longitude pair. Both coordinates are always present together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Returns `None` unless both coordinates are finite
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self { latitude, longitude })
        } else {
            None
        }
    }

    pub fn is_on_earth(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The unified art form entity every source is normalized into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtFormRecord {
    pub name: String,
    pub category: Category,
    pub region: Option<String>,
    pub has_gi_tag: bool,
    pub description: String,
    pub image_url: String,
    pub location: Option<GeoPoint>,
    pub scheme_name: String,
    pub scheme_allocation: String,
    pub cooperative_name: String,
}

impl ArtFormRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.name.clone(), self.region.clone())
    }

    pub fn latitude(&self) -> Option<f64> {
        self.location.map(|p| p.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.location.map(|p| p.longitude)
    }
}

/// Identity of a record in the catalogue: the `(name, region)` pair.
/// Also used by callers to hold the currently selected record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub name: String,
    pub region: Option<String>,
}

impl RecordKey {
    pub fn new(name: impl Into<String>, region: Option<String>) -> Self {
        Self {
            name: name.into(),
            region,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{} ({})", self.name, region),
            None => f.write_str(&self.name),
        }
    }
}
