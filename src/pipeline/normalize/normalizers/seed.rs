use super::base::SourceNormalizer;
use crate::apis::SeedRecord;
use crate::common::constants::SEED_SOURCE;
use crate::domain::{ArtFormRecord, GeoPoint};
use crate::pipeline::normalize::NormalizedRecord;

/// Seed records are complete; they are copied across with their own category
pub struct SeedNormalizer;

impl SourceNormalizer for SeedNormalizer {
    type Row = SeedRecord;

    fn normalize(&self, seed: &SeedRecord) -> NormalizedRecord {
        NormalizedRecord {
            record: ArtFormRecord {
                name: seed.name.to_string(),
                category: seed.category.clone(),
                region: Some(seed.region.to_string()),
                has_gi_tag: seed.has_gi_tag,
                description: seed.description.to_string(),
                image_url: seed.image_url.clone(),
                location: GeoPoint::new(seed.latitude, seed.longitude),
                scheme_name: seed.scheme_name.to_string(),
                scheme_allocation: seed.scheme_allocation.to_string(),
                cooperative_name: seed.cooperative_name.to_string(),
            },
            source_id: SEED_SOURCE,
            warnings: Vec::new(),
        }
    }

    fn source_id(&self) -> &'static str {
        SEED_SOURCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::seed_records;
    use crate::domain::Category;

    #[test]
    fn test_seed_fields_are_taken_verbatim() {
        let seeds = seed_records();
        let dhokra = seeds.iter().find(|s| s.name == "Dhokra").unwrap();

        let normalized = SeedNormalizer.normalize(dhokra);
        let record = normalized.record;
        assert_eq!(record.category, Category::Craft);
        assert_eq!(record.region.as_deref(), Some("Chhattisgarh"));
        assert_eq!(record.description, "Ancient bell metal craft practiced by the Dhokra Damar tribes...");
        assert_eq!(record.image_url, "https://raw.githubusercontent.com/yashgupta17402/hero/main/dhokra.jpg");
        assert_eq!((record.latitude(), record.longitude()), (Some(21.3), Some(81.6)));
        assert_eq!(record.scheme_allocation, "₹1.1 Cr");
        assert!(normalized.warnings.is_empty());
    }
}
