// Base trait and shared helpers for source-specific normalizers
pub mod base;

// Individual normalizer implementations
pub mod craft;
pub mod regional;
pub mod seed;

pub use base::SourceNormalizer;
pub use craft::CraftNormalizer;
pub use regional::RegionalArtNormalizer;
pub use seed::SeedNormalizer;
