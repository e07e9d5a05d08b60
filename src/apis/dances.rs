use super::{RegionalArtColumns, RegionalArtRow, SourceAdapter};
use crate::common::constants::{DANCES_QUERY, DANCES_SOURCE};
use crate::store::TableRow;

const COLUMNS: RegionalArtColumns = RegionalArtColumns {
    name: "DANCE_NAME_SF",
    region: "DANCE_REGION_STATE",
    description: "DANCE_DESC",
    image_url: "DANCE_IMAGE_URL_SF",
    latitude: "DANCE_LATITUDE",
    longitude: "DANCE_LONGITUDE",
};

/// Dance forms from the `DANCE` table
pub struct DancesAdapter;

impl SourceAdapter for DancesAdapter {
    type Row = RegionalArtRow;

    fn source_id(&self) -> &'static str {
        DANCES_SOURCE
    }

    fn query(&self) -> &'static str {
        DANCES_QUERY
    }

    fn parse_row(&self, row: &TableRow<'_>) -> RegionalArtRow {
        COLUMNS.parse(row)
    }
}
