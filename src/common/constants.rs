/// Source name constants to keep adapter ids, log fields and metric labels consistent

// Source ids (used in logs, metrics and failure reports)
pub const SEED_SOURCE: &str = "seed";
pub const PAINTINGS_SOURCE: &str = "paintings";
pub const DANCES_SOURCE: &str = "dances";
pub const CRAFTS_SOURCE: &str = "crafts";

// Fixed read-only query per source
pub const PAINTINGS_QUERY: &str = r#"SELECT "PAINTING" AS PAINTING_NAME_SF, "REGION_STATE" AS PAINTING_REGION_STATE, "DESCRIPTION" AS PAINTING_DESC FROM "PAINTING";"#;
pub const DANCES_QUERY: &str = r#"SELECT "DANCE" AS DANCE_NAME_SF, "REGION_STATE" AS DANCE_REGION_STATE, "DESCRIPTION" AS DANCE_DESC FROM "DANCE";"#;
pub const CRAFTS_QUERY: &str = r#"SELECT "C1" AS CRAFT_STATE_UT, "C2" AS CRAFT_DISTRICT, "C3" AS CRAFT_NAME_SF, "C4" AS CRAFT_VILLAGE FROM "CRAFTS";"#;

// Placeholder image service used when no real image is known
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/300x200.png";
pub const IMAGE_NOT_AVAILABLE_URL: &str =
    "https://via.placeholder.com/300x200.png?text=Image+Not+Available";

// Sentinels for fields no remote table carries
pub const SCHEME_TO_BE_UPDATED: &str = "To be updated";
pub const ALLOCATION_NOT_AVAILABLE: &str = "N/A";
pub const COOPERATIVE_TO_BE_UPDATED: &str = "To be updated";

pub const DEFAULT_COUNTRY: &str = "India";
pub const NOT_AVAILABLE: &str = "N/A";

// Filter sentinels
pub const ALL: &str = "All";
pub const ALL_STATES: &str = "All States";
pub const ALL_TYPES: &str = "All Types";

/// Default cache window for remote query results
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

