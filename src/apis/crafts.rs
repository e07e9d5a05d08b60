use super::{number, text, SourceAdapter};
use crate::common::constants::{CRAFTS_QUERY, CRAFTS_SOURCE};
use crate::store::TableRow;

/// Validated row of the `CRAFTS` table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CraftRow {
    pub name: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Village crafts from the `CRAFTS` table, whose columns are positional (`C1`..`C4`)
pub struct CraftsAdapter;

impl SourceAdapter for CraftsAdapter {
    type Row = CraftRow;

    fn source_id(&self) -> &'static str {
        CRAFTS_SOURCE
    }

    fn query(&self) -> &'static str {
        CRAFTS_QUERY
    }

    fn parse_row(&self, row: &TableRow<'_>) -> CraftRow {
        CraftRow {
            name: text(row, "CRAFT_NAME_SF"),
            region: text(row, "CRAFT_STATE_UT"),
            district: text(row, "CRAFT_DISTRICT"),
            village: text(row, "CRAFT_VILLAGE"),
            image_url: text(row, "CRAFT_IMAGE_URL_SF"),
            latitude: number(row, "CRAFT_LATITUDE"),
            longitude: number(row, "CRAFT_LONGITUDE"),
        }
    }
}
