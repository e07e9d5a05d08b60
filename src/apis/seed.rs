//! Records bundled with the crate. They are merged ahead of every remote
//! source, so they win any `(name, region)` collision.

use crate::domain::Category;

/// A fully specified record; no field needs a fallback
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRecord {
    pub name: &'static str,
    pub category: Category,
    pub region: &'static str,
    pub has_gi_tag: bool,
    pub description: &'static str,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub scheme_name: &'static str,
    pub scheme_allocation: &'static str,
    pub cooperative_name: &'static str,
}

const SCHEME: &str = "National Handicraft Development Program";
const IMAGE_BASE: &str = "https://raw.githubusercontent.com/yashgupta17402/hero/main";

pub fn seed_records() -> Vec<SeedRecord> {
    let rows: [(&str, Category, &str, bool, &str, &str, f64, f64, &str, &str); 7] = [
        (
            "Pashmina Shawls",
            Category::Textile,
            "Jammu & Kashmir",
            true,
            "Exquisite handwoven shawls made from the finest cashmere wool...",
            "pashmina.jpg",
            34.1,
            74.8,
            "₹3.1 Cr",
            "Kashmir Pashmina Artisans Cooperative",
        ),
        (
            "Banarasi Silk",
            Category::Textile,
            "Uttar Pradesh",
            true,
            "Luxurious silk textiles woven with intricate gold and silver brocade...",
            "banarasi.jpg",
            25.3,
            83.0,
            "₹2.7 Cr",
            "Varanasi Weavers Association",
        ),
        (
            "Phulkari",
            Category::Textile,
            "Punjab",
            true,
            "Embroidery technique from Punjab with colorful thread work...",
            "phulkari.jpg",
            31.1,
            75.3,
            "₹1.9 Cr",
            "Punjab Phulkari Cooperative",
        ),
        (
            "Chikankari",
            Category::Textile,
            "Uttar Pradesh",
            true,
            "Delicate and intricate hand embroidery from Lucknow...",
            "chikankari.jpg",
            26.8,
            80.9,
            "₹2.3 Cr",
            "Lucknow Chikankari Kala Kendra",
        ),
        (
            "Kantha",
            Category::Textile,
            "West Bengal",
            false,
            "Running stitch embroidery used to make quilts and decorative items.",
            "kantha.jpg",
            22.6,
            88.4,
            "₹1.4 Cr",
            "Bengal Women Artisans Cooperative",
        ),
        (
            "Bidriware",
            Category::Craft,
            "Karnataka",
            true,
            "Metal handicraft from Bidar, Karnataka...",
            "bidriware.jpg",
            17.9,
            77.5,
            "₹1.6 Cr",
            "Bidri Craft Association",
        ),
        (
            "Dhokra",
            Category::Craft,
            "Chhattisgarh",
            false,
            "Ancient bell metal craft practiced by the Dhokra Damar tribes...",
            "dhokra.jpg",
            21.3,
            81.6,
            "₹1.1 Cr",
            "Bastar Dhokra Shilp Cooperative",
        ),
    ];

    rows.into_iter()
        .map(
            |(name, category, region, has_gi_tag, description, image, latitude, longitude, allocation, cooperative)| {
                SeedRecord {
                    name,
                    category,
                    region,
                    has_gi_tag,
                    description,
                    image_url: format!("{}/{}", IMAGE_BASE, image),
                    latitude,
                    longitude,
                    scheme_name: SCHEME,
                    scheme_allocation: allocation,
                    cooperative_name: cooperative,
                }
            },
        )
        .collect()
}
