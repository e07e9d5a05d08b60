//! Approximate map positions for Indian states and the composite regions the
//! catalogue tables use.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::GeoPoint;

static REGION_COORDINATES: Lazy<HashMap<&'static str, GeoPoint>> = Lazy::new(|| {
    let table: [(&str, f64, f64); 34] = [
        ("Andhra Pradesh", 16.5, 80.6),
        ("Arunachal Pradesh", 27.1004, 93.6167),
        ("Assam", 26.2006, 92.9376),
        ("Bihar", 25.4, 85.4),
        ("Chhattisgarh", 21.3, 81.6),
        ("Goa", 15.2993, 74.1240),
        ("Gujarat", 22.3, 72.6),
        ("Haryana", 29.0588, 76.0856),
        ("Himachal Pradesh", 31.1048, 77.1734),
        ("Jharkhand", 23.6102, 85.2799),
        ("Jammu & Kashmir", 34.1, 74.8),
        ("Karnataka", 15.3, 75.7),
        ("Kerala", 10.8, 76.3),
        ("Madhya Pradesh", 23.2, 77.4),
        ("Maharashtra", 19.2, 73.2),
        ("Manipur", 24.6637, 93.9063),
        ("Meghalaya", 25.4670, 91.3662),
        ("Mizoram", 23.1645, 92.9376),
        ("Nagaland", 26.1584, 94.5624),
        ("Odisha", 20.3, 85.8),
        ("Punjab", 31.1, 75.3),
        ("Rajasthan", 27.0, 74.2),
        ("Sikkim", 27.5330, 88.5122),
        ("Tamil Nadu", 11.1, 78.7),
        ("Telangana", 18.1124, 79.0193),
        ("Tripura", 23.9408, 91.9882),
        ("Uttar Pradesh", 26.8, 80.9),
        ("Uttarakhand", 30.0668, 79.0193),
        ("West Bengal", 22.6, 88.4),
        // Composite regions
        ("Odisha, West Bengal", 21.5, 87.0),
        ("Odisha, Jharkhand, West Bengal", 22.5, 87.0),
        ("Gujarat, Madhya Pradesh", 22.8, 73.0),
        ("Rajasthan, Himachal Pradesh", 29.0, 76.0),
        ("Andhra Pradesh, Telangana", 17.0, 79.5),
    ];

    table
        .into_iter()
        .map(|(region, latitude, longitude)| (region, GeoPoint { latitude, longitude }))
        .collect()
});

/// Look up the approximate position of a region.
///
/// Matching is exact after trimming surrounding whitespace. A missing region
/// or one that is not in the table yields `None`.
pub fn lookup(region: Option<&str>) -> Option<GeoPoint> {
    let region = region?.trim();
    REGION_COORDINATES.get(region).copied()
}

/// All region names the table knows, sorted
pub fn known_regions() -> Vec<&'static str> {
    let mut regions: Vec<&'static str> = REGION_COORDINATES.keys().copied().collect();
    regions.sort_unstable();
    regions
}
